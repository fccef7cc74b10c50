//! User, account and cash command implementations

use anyhow::{bail, Result};
use tally_core::App;

use super::{normalize_currency, print_json, truncate};

/// List all users
pub fn cmd_users_list(app: &App, json: bool) -> Result<()> {
    let users = app.db().list_users()?;

    if json {
        return print_json(&users);
    }

    if users.is_empty() {
        println!("No users yet. Add one with:");
        println!("  tally users add <name>");
        return Ok(());
    }

    println!();
    println!("👤 Users");
    println!("   ──────────────────────────────");
    for user in users {
        println!("   {:>4} │ {}", user.id, user.name);
    }

    Ok(())
}

/// Add a user
pub fn cmd_users_add(app: &App, name: &str) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        bail!("User name cannot be empty");
    }

    let id = app.add_user(name)?;
    println!("✅ Added user '{}' (id: {})", name, id);
    Ok(id)
}

/// List a user's accounts with balances
pub fn cmd_accounts_list(app: &App, user_id: i64, json: bool) -> Result<()> {
    let accounts = app.fetch_account_details(user_id)?;

    if json {
        return print_json(&accounts);
    }

    if accounts.is_empty() {
        println!("No accounts for user {}. Add one with:", user_id);
        println!("  tally accounts --user {} add <name> --holder <holder>", user_id);
        return Ok(());
    }

    println!();
    println!("🏦 Accounts");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:>4} │ {:20} │ {:16} │ {:>14} │ {}",
        "ID", "Name", "Holder", "Cash", "Investments"
    );
    println!("   ─────┼──────────────────────┼──────────────────┼────────────────┼────────────");

    for account in &accounts {
        println!(
            "   {:>4} │ {:20} │ {:16} │ {:>10.2} {:3} │ {}",
            account.id,
            truncate(&account.name, 20),
            truncate(&account.holder, 16),
            account.cash,
            account.cash_currency,
            account.investments.len()
        );
        for investment in &account.investments {
            println!(
                "        └─ #{:<5} {:24} {:16} {:>12.2} {}",
                investment.id,
                truncate(&investment.name, 24),
                truncate(&investment.category, 16),
                investment.amount,
                investment.currency
            );
        }
    }

    Ok(())
}

/// Add an account
pub fn cmd_accounts_add(app: &App, user_id: i64, name: &str, holder: &str) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Account name cannot be empty");
    }

    let id = app.add_account(user_id, name, holder.trim())?;
    println!("✅ Added account '{}' (id: {}) for user {}", name, id, user_id);
    Ok(id)
}

/// Delete an account together with its cash and investments
pub fn cmd_accounts_delete(app: &App, id: i64) -> Result<()> {
    let existing = app.db().get_account(id)?;
    app.delete_account(id)?;

    match existing {
        Some(account) => println!("🗑️  Deleted account '{}' (id: {})", account.name, id),
        None => println!("No account with id {} (nothing deleted)", id),
    }
    Ok(())
}

/// Set the cash balance of an account
pub fn cmd_cash_set(app: &App, account_id: i64, amount: f64, currency: &str) -> Result<()> {
    if !amount.is_finite() {
        bail!("Amount must be a finite number");
    }
    if app.db().get_account(account_id)?.is_none() {
        tracing::warn!(account_id, "Setting cash on an account that does not exist");
    }

    let currency = normalize_currency(currency);
    app.update_cash(account_id, amount, &currency)?;
    println!("✅ Cash of account {} set to {:.2} {}", account_id, amount, currency);
    Ok(())
}
