//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track accounts, cash and investments across currencies
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Local personal accounting: accounts, cash, investments, exchange rates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the platform data directory)
    #[arg(long, env = "TALLY_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage users (list, add)
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Manage accounts (list with balances, add, delete)
    Accounts {
        /// User whose accounts to list
        #[arg(short, long, default_value = "1")]
        user: i64,

        #[command(subcommand)]
        action: Option<AccountsAction>,
    },

    /// Set the cash balance of an account
    Cash {
        /// Account ID
        account: i64,

        /// New balance
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Currency code
        #[arg(short, long, default_value = "EUR")]
        currency: String,
    },

    /// Manage investments (add, update, delete)
    Investments {
        #[command(subcommand)]
        action: InvestmentsAction,
    },

    /// Manage investment categories (list, add)
    Categories {
        /// User whose categories to manage
        #[arg(short, long, default_value = "1")]
        user: i64,

        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Show today's exchange rates
    Rates {
        /// Base currency (defaults to the reporting currency)
        #[arg(short, long)]
        base: Option<String>,

        /// Target currencies, e.g. USD JPY GBP
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Show a portfolio breakdown in one currency
    Portfolio {
        /// User ID
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Break down a single account by investment instead of all by category
        #[arg(short, long)]
        account: Option<i64>,

        /// Reporting currency (defaults to the configured one)
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Export a portfolio breakdown to CSV
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// User ID
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Export a single account by investment instead of all by category
        #[arg(short, long)]
        account: Option<i64>,

        /// Reporting currency (defaults to the configured one)
        #[arg(short, long)]
        currency: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users
    List,
    /// Add a user
    Add {
        /// User name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum AccountsAction {
    /// List accounts with cash and investments
    List,
    /// Add an account
    Add {
        /// Account name
        name: String,

        /// Account holder
        #[arg(long)]
        holder: String,
    },
    /// Delete an account with its cash and investments
    Delete {
        /// Account ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum InvestmentsAction {
    /// Add an investment to an account
    Add {
        /// Account ID
        #[arg(short, long)]
        account: i64,

        /// Investment name
        #[arg(short, long)]
        name: String,

        /// Category label
        #[arg(long)]
        category: String,

        /// Current value
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// Currency code
        #[arg(short, long, default_value = "EUR")]
        currency: String,
    },
    /// Overwrite an existing investment
    Update {
        /// Investment ID
        id: i64,

        /// Investment name
        #[arg(short, long)]
        name: String,

        /// Category label
        #[arg(long)]
        category: String,

        /// Current value
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// Currency code
        #[arg(short, long, default_value = "EUR")]
        currency: String,
    },
    /// Delete an investment
    Delete {
        /// Investment ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories
    List,
    /// Add a category label
    Add {
        /// Category label
        label: String,
    },
}
