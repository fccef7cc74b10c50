//! Portfolio breakdowns in a single reporting currency
//!
//! Rates are expected the way the exchange-rate API returns them for the
//! reporting currency as base: `rates[ccy]` units of `ccy` per one unit of
//! the reporting currency. A holding converts as `amount / rates[ccy]`.
//!
//! Every converted holding is rounded to cents before being summed, so the
//! breakdown rows add up to what a user sees line by line.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};
use crate::models::{AccountDetails, ExchangeRates, InvestmentSummary};

/// Label of the row that collects cash balances in the overall breakdown
pub const CASH_CATEGORY: &str = "Cash";

/// Round to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert an amount into the reporting currency
///
/// The reporting currency itself converts 1:1 whether or not it is in `rates`.
pub fn to_reporting_currency(
    amount: f64,
    currency: &str,
    reporting_currency: &str,
    rates: &ExchangeRates,
) -> Result<f64> {
    if currency == reporting_currency {
        return Ok(amount);
    }

    let rate = rates
        .get(currency)
        .copied()
        .ok_or_else(|| Error::MissingRate(currency.to_string()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::InvalidData(format!(
            "unusable exchange rate {} for {}",
            rate, currency
        )));
    }

    Ok(amount / rate)
}

/// Currencies (other than the reporting one) that a set of accounts holds
///
/// This is the target list to request from the rate API.
pub fn currencies_needed(accounts: &[AccountDetails], reporting_currency: &str) -> Vec<String> {
    let mut currencies = BTreeSet::new();
    for account in accounts {
        currencies.insert(account.cash_currency.as_str());
        for investment in &account.investments {
            currencies.insert(investment.currency.as_str());
        }
    }
    currencies.remove(reporting_currency);
    currencies.into_iter().map(str::to_string).collect()
}

/// Currencies (other than the reporting one) of an account's investments
pub fn investment_currencies(account: &AccountDetails, reporting_currency: &str) -> Vec<String> {
    let mut currencies: BTreeSet<&str> = account
        .investments
        .iter()
        .map(|i| i.currency.as_str())
        .collect();
    currencies.remove(reporting_currency);
    currencies.into_iter().map(str::to_string).collect()
}

/// One row per investment of an account, labeled by investment name
pub fn account_breakdown(
    account: &AccountDetails,
    reporting_currency: &str,
    rates: &ExchangeRates,
) -> Result<Vec<InvestmentSummary>> {
    account
        .investments
        .iter()
        .map(|investment| {
            let value = to_reporting_currency(
                investment.amount,
                &investment.currency,
                reporting_currency,
                rates,
            )?;
            Ok(InvestmentSummary {
                category: investment.name.clone(),
                amount: round_cents(value),
                currency: reporting_currency.to_string(),
            })
        })
        .collect()
}

/// One row per investment category across all accounts, then a cash row
///
/// Categories keep the order in which they are first seen. The cash row is
/// only present when there is at least one account.
pub fn overall_breakdown(
    accounts: &[AccountDetails],
    reporting_currency: &str,
    rates: &ExchangeRates,
) -> Result<Vec<InvestmentSummary>> {
    let mut rows: Vec<InvestmentSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for account in accounts {
        for investment in &account.investments {
            let value = round_cents(to_reporting_currency(
                investment.amount,
                &investment.currency,
                reporting_currency,
                rates,
            )?);

            match index.get(&investment.category) {
                Some(&i) => rows[i].amount = round_cents(rows[i].amount + value),
                None => {
                    index.insert(investment.category.clone(), rows.len());
                    rows.push(InvestmentSummary {
                        category: investment.category.clone(),
                        amount: value,
                        currency: reporting_currency.to_string(),
                    });
                }
            }
        }
    }

    if !accounts.is_empty() {
        let mut cash = 0.0;
        for account in accounts {
            cash += round_cents(to_reporting_currency(
                account.cash,
                &account.cash_currency,
                reporting_currency,
                rates,
            )?);
        }
        rows.push(InvestmentSummary {
            category: CASH_CATEGORY.to_string(),
            amount: round_cents(cash),
            currency: reporting_currency.to_string(),
        });
    }

    Ok(rows)
}

/// Sum of all row amounts
pub fn total_value(rows: &[InvestmentSummary]) -> f64 {
    round_cents(rows.iter().map(|r| r.amount).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Investment;

    fn investment(id: i64, name: &str, category: &str, amount: f64, currency: &str) -> Investment {
        Investment {
            id,
            account_id: 1,
            name: name.to_string(),
            category: category.to_string(),
            amount,
            currency: currency.to_string(),
        }
    }

    fn account(id: i64, cash: f64, cash_currency: &str, investments: Vec<Investment>) -> AccountDetails {
        AccountDetails {
            id,
            name: format!("Account {}", id),
            holder: "Alice".to_string(),
            cash,
            cash_currency: cash_currency.to_string(),
            investments,
        }
    }

    fn eur_rates() -> ExchangeRates {
        ExchangeRates::from([
            ("USD".to_string(), 1.25),
            ("CHF".to_string(), 0.5),
        ])
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(10.0), 10.0);
        assert_eq!(round_cents(2.344), 2.34);
        assert_eq!(round_cents(2.346), 2.35);
    }

    #[test]
    fn test_convert_same_currency_without_rate() {
        let value = to_reporting_currency(42.0, "EUR", "EUR", &ExchangeRates::new()).unwrap();
        assert_eq!(value, 42.0);
    }

    #[test]
    fn test_convert_divides_by_rate() {
        let value = to_reporting_currency(125.0, "USD", "EUR", &eur_rates()).unwrap();
        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_convert_missing_rate() {
        let err = to_reporting_currency(1.0, "JPY", "EUR", &eur_rates()).unwrap_err();
        assert!(matches!(err, Error::MissingRate(ref c) if c == "JPY"));
    }

    #[test]
    fn test_convert_zero_rate_rejected() {
        let rates = ExchangeRates::from([("USD".to_string(), 0.0)]);
        let err = to_reporting_currency(1.0, "USD", "EUR", &rates).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_currencies_needed() {
        let accounts = vec![
            account(1, 10.0, "EUR", vec![investment(1, "ETF", "Stocks", 1.0, "USD")]),
            account(2, 10.0, "CHF", vec![investment(2, "Bond", "Bonds", 1.0, "USD")]),
        ];
        assert_eq!(currencies_needed(&accounts, "EUR"), vec!["CHF", "USD"]);
        assert!(currencies_needed(&[], "EUR").is_empty());
    }

    #[test]
    fn test_investment_currencies_ignore_cash() {
        let acc = account(
            1,
            10.0,
            "CHF",
            vec![
                investment(1, "ETF", "Stocks", 1.0, "USD"),
                investment(2, "Bund", "Bonds", 1.0, "EUR"),
            ],
        );
        assert_eq!(investment_currencies(&acc, "EUR"), vec!["USD"]);
    }

    #[test]
    fn test_account_breakdown() {
        let acc = account(
            1,
            0.0,
            "EUR",
            vec![
                investment(1, "ETF", "Stocks", 125.0, "USD"),
                investment(2, "Gold", "Metals", 30.0, "EUR"),
            ],
        );

        let rows = account_breakdown(&acc, "EUR", &eur_rates()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "ETF");
        assert_eq!(rows[0].amount, 100.0);
        assert_eq!(rows[1].category, "Gold");
        assert_eq!(rows[1].amount, 30.0);
        assert!(rows.iter().all(|r| r.currency == "EUR"));
    }

    #[test]
    fn test_overall_breakdown_groups_by_category_and_adds_cash() {
        let accounts = vec![
            account(
                1,
                50.0,
                "CHF",
                vec![
                    investment(1, "ETF", "Stocks", 125.0, "USD"),
                    investment(2, "Bund", "Bonds", 40.0, "EUR"),
                ],
            ),
            account(2, 10.0, "EUR", vec![investment(3, "Share", "Stocks", 20.0, "EUR")]),
        ];

        let rows = overall_breakdown(&accounts, "EUR", &eur_rates()).unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(labels, vec!["Stocks", "Bonds", CASH_CATEGORY]);
        assert_eq!(rows[0].amount, 120.0);
        assert_eq!(rows[1].amount, 40.0);
        // 50 CHF at 0.5 per EUR + 10 EUR
        assert_eq!(rows[2].amount, 110.0);
        assert_eq!(total_value(&rows), 270.0);
    }

    #[test]
    fn test_overall_breakdown_without_accounts_is_empty() {
        let rows = overall_breakdown(&[], "EUR", &eur_rates()).unwrap();
        assert!(rows.is_empty());
        assert_eq!(total_value(&rows), 0.0);
    }

    #[test]
    fn test_overall_breakdown_missing_rate_fails() {
        let accounts = vec![account(1, 0.0, "EUR", vec![investment(1, "X", "Stocks", 1.0, "JPY")])];
        assert!(overall_breakdown(&accounts, "EUR", &eur_rates()).is_err());
    }
}
