//! Tally Core Library
//!
//! Shared functionality for the Tally personal accounting tool:
//! - SQLite storage for users, accounts, cash balances, investments and categories
//! - Exchange-rate lookups against an exchangerate-api.com compatible service
//! - Portfolio breakdowns in a single reporting currency
//! - CSV export of investment statistics
//! - `App`, the facade a UI shell calls into

pub mod bridge;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod portfolio;
pub mod rates;

/// Test utilities including mock exchange-rate server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use bridge::App;
pub use config::Settings;
pub use db::Database;
pub use error::{Error, Result};
pub use rates::RatesClient;
