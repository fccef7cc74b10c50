//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_app, print_json) and init
//! - `accounts` - Users, accounts and cash balances
//! - `investments` - Investment add/update/delete and categories
//! - `reports` - Exchange rates, portfolio breakdown and CSV export

pub mod accounts;
pub mod core;
pub mod investments;
pub mod reports;

// Re-export command functions for main.rs
pub use accounts::*;
pub use core::*;
pub use investments::*;
pub use reports::*;

/// Currency codes as the CLI stores and reports them: trimmed, uppercase
pub fn normalize_currency(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
