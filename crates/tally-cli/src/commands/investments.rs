//! Investment and category command implementations

use anyhow::{bail, Result};
use tally_core::models::{InvestmentChange, InvestmentFields, InvestmentInput};
use tally_core::App;

use super::{normalize_currency, print_json};

/// Add an investment to an account, returning its id
pub fn cmd_investments_add(
    app: &App,
    account_id: i64,
    name: &str,
    category: &str,
    amount: f64,
    currency: &str,
) -> Result<i64> {
    if !amount.is_finite() {
        bail!("Amount must be a finite number");
    }

    let ids = app.update_investment(vec![InvestmentInput {
        id: 0,
        account_id,
        name: name.trim().to_string(),
        category: category.trim().to_string(),
        amount,
        currency: normalize_currency(currency),
    }])?;

    let id = ids[0];
    println!("✅ Added investment '{}' (id: {}) to account {}", name.trim(), id, account_id);
    Ok(id)
}

/// Overwrite an existing investment
pub fn cmd_investments_update(
    app: &App,
    id: i64,
    name: &str,
    category: &str,
    amount: f64,
    currency: &str,
) -> Result<()> {
    if !amount.is_finite() {
        bail!("Amount must be a finite number");
    }

    app.db().update_investments(&[InvestmentChange::Existing {
        id,
        fields: InvestmentFields {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            amount,
            currency: normalize_currency(currency),
        },
    }])?;

    println!("✅ Updated investment {}", id);
    Ok(())
}

/// Delete an investment
pub fn cmd_investments_delete(app: &App, id: i64) -> Result<()> {
    app.delete_investment(id)?;
    println!("🗑️  Deleted investment {}", id);
    Ok(())
}

/// List a user's category labels
pub fn cmd_categories_list(app: &App, user_id: i64, json: bool) -> Result<()> {
    let categories = app.fetch_categories(user_id)?;

    if json {
        return print_json(&categories);
    }

    if categories.is_empty() {
        println!("No categories for user {}. Add one with:", user_id);
        println!("  tally categories --user {} add <label>", user_id);
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ──────────────────────────────");
    for label in categories {
        println!("   • {}", label);
    }

    Ok(())
}

/// Add a category label
pub fn cmd_categories_add(app: &App, user_id: i64, label: &str) -> Result<()> {
    let label = label.trim();
    if label.is_empty() {
        bail!("Category label cannot be empty");
    }

    app.add_category(user_id, label)?;
    println!("✅ Added category '{}'", label);
    Ok(())
}
