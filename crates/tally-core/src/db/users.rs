//! User operations

use rusqlite::params;

use super::Database;
use crate::error::Result;
use crate::models::User;

impl Database {
    /// Register a user, returning the new id
    pub fn add_user(&self, name: &str) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO users (user_name) VALUES (?)", params![name])?;
        Ok(conn.last_insert_rowid())
    }

    /// List all users by id
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, user_name FROM users ORDER BY id")?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(users)
    }
}
