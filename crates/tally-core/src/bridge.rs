//! UI-facing facade
//!
//! `App` is the surface a shell (GUI or CLI) calls into. Each method forwards
//! to the matching repository, client or exporter and returns its result
//! unchanged; the UI decides how to present failures.

use std::path::Path;

use tracing::debug;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::export;
use crate::models::{AccountDetails, Categories, ExchangeRates, InvestmentInput, InvestmentSummary};
use crate::portfolio;
use crate::rates::RatesClient;

/// Bridged application backend
#[derive(Clone)]
pub struct App {
    db: Database,
    rates: RatesClient,
}

impl App {
    pub fn new(db: Database, rates: RatesClient) -> Self {
        Self { db, rates }
    }

    /// Access the underlying database
    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn add_user(&self, user_name: &str) -> Result<i64> {
        debug!(user_name, "AddUser");
        self.db.add_user(user_name)
    }

    pub fn add_account(&self, user_id: i64, account_name: &str, holder_name: &str) -> Result<i64> {
        debug!(user_id, account_name, "AddAccount");
        self.db.add_account(user_id, account_name, holder_name)
    }

    pub fn delete_account(&self, account_id: i64) -> Result<()> {
        debug!(account_id, "DeleteAccount");
        self.db.delete_account(account_id)
    }

    pub fn update_cash(&self, account_id: i64, amount: f64, currency: &str) -> Result<()> {
        debug!(account_id, amount, currency, "UpdateCash");
        self.db.update_cash(account_id, amount, currency)
    }

    /// Save a batch of investments as sent by the UI (id 0 = new row)
    ///
    /// Returns the row id of each item in input order.
    pub fn update_investment(&self, investments: Vec<InvestmentInput>) -> Result<Vec<i64>> {
        debug!(count = investments.len(), "UpdateInvestment");
        let changes: Vec<_> = investments.into_iter().map(Into::into).collect();
        self.db.update_investments(&changes)
    }

    pub fn delete_investment(&self, investment_id: i64) -> Result<()> {
        debug!(investment_id, "DeleteInvestment");
        self.db.delete_investment(investment_id)
    }

    pub fn fetch_account_details(&self, user_id: i64) -> Result<Vec<AccountDetails>> {
        debug!(user_id, "FetchAccountDetails");
        self.db.get_account_details(user_id)
    }

    pub fn fetch_categories(&self, user_id: i64) -> Result<Categories> {
        debug!(user_id, "FetchCategories");
        self.db.get_categories(user_id)
    }

    pub fn add_category(&self, user_id: i64, category: &str) -> Result<()> {
        debug!(user_id, category, "AddCategory");
        self.db.add_category(user_id, category)
    }

    pub async fn get_exchange_rates(
        &self,
        base_currency: &str,
        target_currencies: &[String],
    ) -> Result<ExchangeRates> {
        debug!(base_currency, "GetExchangeRates");
        self.rates
            .get_exchange_rates(base_currency, target_currencies)
            .await
    }

    /// Export a breakdown to the path the user picked
    ///
    /// An empty path means the user dismissed the save dialog.
    pub fn save_investment_statistics(
        &self,
        save_path: &Path,
        investments: &[InvestmentSummary],
    ) -> Result<()> {
        if save_path.as_os_str().is_empty() {
            return Err(Error::InvalidData("no path selected".to_string()));
        }
        debug!(path = %save_path.display(), "SaveInvestmentStatistics");
        export::save_investment_statistics(save_path, investments)
    }

    /// Breakdown of a user's holdings in `reporting_currency`
    ///
    /// Without `account_id` every account is grouped by category plus a cash
    /// row; with it, that one account's investments are listed by name.
    pub async fn portfolio_breakdown(
        &self,
        user_id: i64,
        reporting_currency: &str,
        account_id: Option<i64>,
    ) -> Result<Vec<InvestmentSummary>> {
        let accounts = self.db.get_account_details(user_id)?;

        match account_id {
            Some(id) => {
                let account = accounts
                    .into_iter()
                    .find(|a| a.id == id)
                    .ok_or_else(|| Error::NotFound(format!("account {} of user {}", id, user_id)))?;
                let targets = portfolio::investment_currencies(&account, reporting_currency);
                let rates = self.rates_for(reporting_currency, &targets).await?;
                portfolio::account_breakdown(&account, reporting_currency, &rates)
            }
            None => {
                let targets = portfolio::currencies_needed(&accounts, reporting_currency);
                let rates = self.rates_for(reporting_currency, &targets).await?;
                portfolio::overall_breakdown(&accounts, reporting_currency, &rates)
            }
        }
    }

    /// Skip the network round trip when everything is already in `base`
    async fn rates_for(&self, base: &str, targets: &[String]) -> Result<ExchangeRates> {
        if targets.is_empty() {
            return Ok(ExchangeRates::new());
        }
        self.get_exchange_rates(base, targets).await
    }
}
