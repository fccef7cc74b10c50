//! Cash balance operations

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::Cash;

impl Database {
    /// Set the cash balance of an account
    ///
    /// Inserts the row on first use and overwrites it afterwards. The unique
    /// index on `cash.account_id` keeps this to one row per account even
    /// under concurrent calls.
    pub fn update_cash(&self, account_id: i64, amount: f64, currency: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO cash (account_id, amount, currency) VALUES (?1, ?2, ?3)
             ON CONFLICT(account_id) DO UPDATE SET amount = excluded.amount, currency = excluded.currency",
            params![account_id, amount, currency],
        )?;
        Ok(())
    }

    /// Get the cash row of an account, if one was ever set
    pub fn get_cash(&self, account_id: i64) -> Result<Option<Cash>> {
        let conn = self.conn()?;
        let cash = conn
            .query_row(
                "SELECT id, account_id, amount, currency FROM cash WHERE account_id = ?",
                params![account_id],
                |row| {
                    Ok(Cash {
                        id: row.get(0)?,
                        account_id: row.get(1)?,
                        amount: row.get(2)?,
                        currency: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(cash)
    }
}
