//! Investment statistics export
//!
//! Writes a breakdown as CSV with one percentage column:
//!
//! ```text
//! Category,Amount,Currency,Percentage
//! Stocks,100.00,USD,25.00
//! Bonds,300.00,USD,75.00
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::InvestmentSummary;
use crate::portfolio::round_cents;

/// CSV header row
pub const STATISTICS_HEADER: [&str; 4] = ["Category", "Amount", "Currency", "Percentage"];

/// Share of `amount` in `total`, in percent
///
/// A total that rounds to zero cents yields 0 for every row.
pub fn percentage_of(amount: f64, total: f64) -> f64 {
    if round_cents(total) == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}

/// Write the statistics CSV to `path`, replacing any existing file
pub fn save_investment_statistics(path: &Path, rows: &[InvestmentSummary]) -> Result<()> {
    let file = File::create(path)?;
    write_investment_statistics(file, rows)?;
    info!(path = %path.display(), rows = rows.len(), "Saved investment statistics");
    Ok(())
}

/// Write the statistics CSV to any writer
pub fn write_investment_statistics<W: Write>(writer: W, rows: &[InvestmentSummary]) -> Result<()> {
    let total: f64 = rows.iter().map(|r| r.amount).sum();

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(STATISTICS_HEADER)?;

    for row in rows {
        let amount = format!("{:.2}", row.amount);
        let percentage = format!("{:.2}", percentage_of(row.amount, total));
        wtr.write_record([
            row.category.as_str(),
            amount.as_str(),
            row.currency.as_str(),
            percentage.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
