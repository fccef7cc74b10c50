//! Composite account read model

use rusqlite::{params, OptionalExtension};

use super::investments::investments_for_account;
use super::Database;
use crate::error::Result;
use crate::models::{AccountDetails, DEFAULT_CASH_CURRENCY};

impl Database {
    /// Every account of a user with its cash balance and investments
    ///
    /// Accounts without a cash row report `0` in the default currency;
    /// accounts without investments carry an empty list.
    pub fn get_account_details(&self, user_id: i64) -> Result<Vec<AccountDetails>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, account_name, holder_name FROM accounts WHERE user_id = ? ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut accounts = Vec::with_capacity(rows.len());
        for (id, name, holder) in rows {
            let (cash, cash_currency) = conn
                .query_row(
                    "SELECT amount, currency FROM cash WHERE account_id = ?",
                    params![id],
                    |row| Ok((row.get::<_, f64>(0)?, row.get::<_, String>(1)?)),
                )
                .optional()?
                .unwrap_or_else(|| (0.0, DEFAULT_CASH_CURRENCY.to_string()));

            let investments = investments_for_account(&conn, id)?;

            accounts.push(AccountDetails {
                id,
                name,
                holder,
                cash,
                cash_currency,
                investments,
            });
        }

        Ok(accounts)
    }
}
