//! Category label operations

use rusqlite::params;

use super::Database;
use crate::error::Result;
use crate::models::Categories;

impl Database {
    /// Append a category label for a user (duplicates are kept)
    pub fn add_category(&self, user_id: i64, label: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO categories (user_id, category) VALUES (?, ?)",
            params![user_id, label],
        )?;
        Ok(())
    }

    /// A user's category labels in the order they were added
    pub fn get_categories(&self, user_id: i64) -> Result<Categories> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT category FROM categories WHERE user_id = ? ORDER BY id")?;

        let categories = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(categories)
    }
}
