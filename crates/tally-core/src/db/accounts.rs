//! Account operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::AccountRecord;

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRecord> {
    Ok(AccountRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        holder: row.get(3)?,
    })
}

impl Database {
    /// Create an account for a user, returning the new id
    ///
    /// The user id is stored as given; it is not checked against `users`.
    pub fn add_account(&self, user_id: i64, account_name: &str, holder_name: &str) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO accounts (user_id, account_name, holder_name) VALUES (?, ?, ?)",
            params![user_id, account_name, holder_name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get an account by ID
    pub fn get_account(&self, id: i64) -> Result<Option<AccountRecord>> {
        let conn = self.conn()?;
        let account = conn
            .query_row(
                "SELECT id, user_id, account_name, holder_name FROM accounts WHERE id = ?",
                params![id],
                account_from_row,
            )
            .optional()?;
        Ok(account)
    }

    /// List a user's accounts in creation order
    pub fn list_accounts(&self, user_id: i64) -> Result<Vec<AccountRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, account_name, holder_name FROM accounts WHERE user_id = ? ORDER BY id",
        )?;

        let accounts = stmt
            .query_map(params![user_id], account_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(accounts)
    }

    /// Delete an account together with its cash and investments
    ///
    /// All three deletes commit together or not at all. Deleting an unknown
    /// id is not an error.
    pub fn delete_account(&self, id: i64) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let accounts = tx.execute("DELETE FROM accounts WHERE id = ?", params![id])?;
        let cash = tx.execute("DELETE FROM cash WHERE account_id = ?", params![id])?;
        let investments = tx.execute("DELETE FROM investments WHERE account_id = ?", params![id])?;

        tx.commit()?;

        info!(
            account_id = id,
            accounts, cash, investments, "Deleted account and dependent rows"
        );
        Ok(())
    }
}
