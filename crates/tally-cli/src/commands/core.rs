//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `resolve_db_path` / `open_app` - Shared utilities to open the backend
//! - `print_json` - JSON output for `--json`
//! - `cmd_init` - Initialize the database

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::{config, App, Database, RatesClient, Settings};

/// Use the given path, or the platform data directory
pub fn resolve_db_path(db_path: Option<&Path>) -> Result<PathBuf> {
    match db_path {
        Some(path) => Ok(path.to_path_buf()),
        None => config::default_db_path()
            .context("Could not determine a data directory; pass --db explicitly"),
    }
}

/// Open the database and build the backend facade
pub fn open_app(db_path: &Path, settings: &Settings) -> Result<App> {
    let path_str = db_path
        .to_str()
        .with_context(|| format!("Database path is not valid UTF-8: {}", db_path.display()))?;
    let db = Database::open(path_str)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    let rates = RatesClient::new(&settings.rates).context("Failed to build HTTP client")?;
    Ok(App::new(db, rates))
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn cmd_init(app: &App) -> Result<()> {
    println!("🔧 Database ready at {}", app.db().path());

    let users = app.db().list_users()?;
    if users.is_empty() {
        println!();
        println!("Next steps:");
        println!("  1. Add a user:     tally users add <name>");
        println!("  2. Add an account: tally accounts --user 1 add <name> --holder <holder>");
    } else {
        println!("   {} user(s) registered", users.len());
    }

    Ok(())
}
