//! Tally CLI - Personal accounting across currencies
//!
//! Usage:
//!   tally init                          Initialize database
//!   tally users add Alice               Register a user
//!   tally accounts --user 1             List accounts with balances
//!   tally portfolio --currency EUR      Breakdown by category
//!   tally export --output stats.csv     Export the breakdown to CSV

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let settings = Settings::load().context("Failed to load settings")?;
    let db_path = commands::resolve_db_path(cli.db.as_deref())?;
    let app = commands::open_app(&db_path, &settings)?;

    match cli.command {
        Commands::Init => commands::cmd_init(&app),
        Commands::Users { action } => match action {
            None | Some(UsersAction::List) => commands::cmd_users_list(&app, cli.json),
            Some(UsersAction::Add { name }) => commands::cmd_users_add(&app, &name).map(|_| ()),
        },
        Commands::Accounts { user, action } => match action {
            None | Some(AccountsAction::List) => commands::cmd_accounts_list(&app, user, cli.json),
            Some(AccountsAction::Add { name, holder }) => {
                commands::cmd_accounts_add(&app, user, &name, &holder).map(|_| ())
            }
            Some(AccountsAction::Delete { id }) => commands::cmd_accounts_delete(&app, id),
        },
        Commands::Cash {
            account,
            amount,
            currency,
        } => commands::cmd_cash_set(&app, account, amount, &currency),
        Commands::Investments { action } => match action {
            InvestmentsAction::Add {
                account,
                name,
                category,
                amount,
                currency,
            } => commands::cmd_investments_add(&app, account, &name, &category, amount, &currency)
                .map(|_| ()),
            InvestmentsAction::Update {
                id,
                name,
                category,
                amount,
                currency,
            } => commands::cmd_investments_update(&app, id, &name, &category, amount, &currency),
            InvestmentsAction::Delete { id } => commands::cmd_investments_delete(&app, id),
        },
        Commands::Categories { user, action } => match action {
            None | Some(CategoriesAction::List) => {
                commands::cmd_categories_list(&app, user, cli.json)
            }
            Some(CategoriesAction::Add { label }) => {
                commands::cmd_categories_add(&app, user, &label)
            }
        },
        Commands::Rates { base, targets } => {
            let base = base.unwrap_or_else(|| settings.reporting_currency.clone());
            commands::cmd_rates(&app, &base, &targets, cli.json).await
        }
        Commands::Portfolio {
            user,
            account,
            currency,
        } => {
            let currency = currency.unwrap_or_else(|| settings.reporting_currency.clone());
            commands::cmd_portfolio(&app, user, account, &currency, cli.json).await
        }
        Commands::Export {
            output,
            user,
            account,
            currency,
        } => {
            let currency = currency.unwrap_or_else(|| settings.reporting_currency.clone());
            commands::cmd_export(&app, &output, user, account, &currency).await
        }
    }
}
