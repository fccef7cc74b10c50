//! Exchange-rate, portfolio and export command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::export::percentage_of;
use tally_core::models::InvestmentSummary;
use tally_core::portfolio::total_value;
use tally_core::App;

use super::{normalize_currency, print_json, truncate};

/// Show today's rates for `targets` against `base`
pub async fn cmd_rates(app: &App, base: &str, targets: &[String], json: bool) -> Result<()> {
    let base = normalize_currency(base);
    let targets: Vec<String> = targets.iter().map(|t| normalize_currency(t)).collect();

    let rates = app
        .get_exchange_rates(&base, &targets)
        .await
        .with_context(|| format!("Failed to fetch exchange rates for {}", base))?;

    if json {
        return print_json(&rates);
    }

    println!();
    println!("💱 Exchange rates (1 {})", base);
    println!("   ──────────────────────────────");
    for (code, rate) in &rates {
        println!("   {:3} │ {:>14.4}", code, rate);
    }

    Ok(())
}

/// Show a portfolio breakdown in one currency
pub async fn cmd_portfolio(
    app: &App,
    user_id: i64,
    account_id: Option<i64>,
    currency: &str,
    json: bool,
) -> Result<()> {
    let currency = normalize_currency(currency);
    let rows = app
        .portfolio_breakdown(user_id, &currency, account_id)
        .await
        .context("Failed to compute portfolio breakdown")?;

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("Nothing to report for user {}.", user_id);
        return Ok(());
    }

    print_breakdown(&rows, &currency, account_id);
    Ok(())
}

fn print_breakdown(rows: &[InvestmentSummary], currency: &str, account_id: Option<i64>) {
    let total = total_value(rows);
    let title = match account_id {
        Some(id) => format!("Account {} by investment", id),
        None => "Portfolio by category".to_string(),
    };

    println!();
    println!("📊 {} ({})", title, currency);
    println!("   ─────────────────────────────────────────────────");
    println!("   {:24} │ {:>14} │ {:>7}", "Name", "Value", "Share");
    println!("   ─────────────────────────┼────────────────┼────────");
    for row in rows {
        println!(
            "   {:24} │ {:>14.2} │ {:>6.2}%",
            truncate(&row.category, 24),
            row.amount,
            percentage_of(row.amount, total)
        );
    }
    println!("   ─────────────────────────┼────────────────┼────────");
    println!("   {:24} │ {:>14.2} │", "Total", total);
}

/// Export a portfolio breakdown to CSV
pub async fn cmd_export(
    app: &App,
    output: &Path,
    user_id: i64,
    account_id: Option<i64>,
    currency: &str,
) -> Result<()> {
    let currency = normalize_currency(currency);
    let rows = app
        .portfolio_breakdown(user_id, &currency, account_id)
        .await
        .context("Failed to compute portfolio breakdown")?;

    app.save_investment_statistics(output, &rows)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "✅ Exported {} row(s) in {} to {}",
        rows.len(),
        currency,
        output.display()
    );
    Ok(())
}
