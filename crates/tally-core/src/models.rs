//! Domain models for Tally

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Currency reported for an account that has no cash row yet
pub const DEFAULT_CASH_CURRENCY: &str = "EUR";

/// A person using the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// A bare account row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub holder: String,
}

/// The cash balance of an account (at most one per account)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cash {
    pub id: i64,
    pub account_id: i64,
    pub amount: f64,
    pub currency: String,
}

/// A stored investment line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub currency: String,
}

/// The editable part of an investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentFields {
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub currency: String,
}

/// One entry of an investment batch update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvestmentChange {
    /// Insert a new line item under `account_id`
    New {
        account_id: i64,
        #[serde(flatten)]
        fields: InvestmentFields,
    },
    /// Overwrite the line item with this id
    Existing {
        id: i64,
        #[serde(flatten)]
        fields: InvestmentFields,
    },
}

impl InvestmentChange {
    pub fn fields(&self) -> &InvestmentFields {
        match self {
            Self::New { fields, .. } | Self::Existing { fields, .. } => fields,
        }
    }
}

/// Investment payload as sent by the UI
///
/// The UI leaves `id` at 0 for rows the user just added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    #[serde(default)]
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub currency: String,
}

impl From<InvestmentInput> for InvestmentChange {
    fn from(input: InvestmentInput) -> Self {
        let fields = InvestmentFields {
            name: input.name,
            category: input.category,
            amount: input.amount,
            currency: input.currency,
        };
        if input.id == 0 {
            Self::New {
                account_id: input.account_id,
                fields,
            }
        } else {
            Self::Existing {
                id: input.id,
                fields,
            }
        }
    }
}

/// An account with its cash balance and investments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub id: i64,
    pub name: String,
    pub holder: String,
    pub cash: f64,
    pub cash_currency: String,
    pub investments: Vec<Investment>,
}

/// Category labels of a user, in insertion order
pub type Categories = Vec<String>;

/// One row of an investment breakdown, also the CSV export input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub category: String,
    pub amount: f64,
    pub currency: String,
}

/// Target currency -> rate, relative to a base currency
pub type ExchangeRates = BTreeMap<String, f64>;
