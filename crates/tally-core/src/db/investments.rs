//! Investment operations

use rusqlite::{params, Connection, Row};
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::{Investment, InvestmentChange};

fn investment_from_row(row: &Row<'_>) -> rusqlite::Result<Investment> {
    Ok(Investment {
        id: row.get(0)?,
        account_id: row.get(1)?,
        name: row.get(2)?,
        category: row.get(3)?,
        amount: row.get(4)?,
        currency: row.get(5)?,
    })
}

/// Investments of one account in insertion order
pub(super) fn investments_for_account(conn: &Connection, account_id: i64) -> Result<Vec<Investment>> {
    let mut stmt = conn.prepare(
        "SELECT id, account_id, investment_name, category, amount, currency
         FROM investments WHERE account_id = ? ORDER BY id",
    )?;

    let investments = stmt
        .query_map(params![account_id], investment_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(investments)
}

impl Database {
    /// Apply a batch of investment inserts and updates
    ///
    /// Returns the row id behind each change, in input order: the generated id
    /// for `New`, the given id for `Existing`. The batch runs in a single
    /// transaction, so a failing item leaves no earlier item applied.
    /// Updating an id that no longer exists changes nothing and is not an error.
    pub fn update_investments(&self, changes: &[InvestmentChange]) -> Result<Vec<i64>> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let mut ids = Vec::with_capacity(changes.len());
        for change in changes {
            match change {
                InvestmentChange::New { account_id, fields } => {
                    tx.execute(
                        "INSERT INTO investments (account_id, investment_name, category, amount, currency)
                         VALUES (?, ?, ?, ?, ?)",
                        params![
                            account_id,
                            fields.name,
                            fields.category,
                            fields.amount,
                            fields.currency
                        ],
                    )?;
                    ids.push(tx.last_insert_rowid());
                }
                InvestmentChange::Existing { id, fields } => {
                    let updated = tx.execute(
                        "UPDATE investments SET investment_name = ?, category = ?, amount = ?, currency = ?
                         WHERE id = ?",
                        params![fields.name, fields.category, fields.amount, fields.currency, id],
                    )?;
                    if updated == 0 {
                        debug!(investment_id = id, "Update matched no investment");
                    }
                    ids.push(*id);
                }
            }
        }

        tx.commit()?;
        Ok(ids)
    }

    /// Delete an investment; unknown ids are not an error
    pub fn delete_investment(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM investments WHERE id = ?", params![id])?;
        Ok(())
    }

    /// List the investments of an account
    pub fn list_investments(&self, account_id: i64) -> Result<Vec<Investment>> {
        let conn = self.conn()?;
        investments_for_account(&conn, account_id)
    }
}
