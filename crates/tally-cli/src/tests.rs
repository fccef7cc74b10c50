//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use tally_core::test_utils::MockRatesServer;
use tally_core::{App, Database, RatesClient, Settings};

use crate::commands::{self, normalize_currency, truncate};

/// App backed by a fresh database whose rate client points nowhere
fn setup_test_app() -> App {
    let db = Database::in_memory().unwrap();
    let rates = RatesClient::with_base_url("http://127.0.0.1:1").unwrap();
    App::new(db, rates)
}

async fn setup_with_rates() -> (App, MockRatesServer) {
    let server = MockRatesServer::start().await;
    let db = Database::in_memory().unwrap();
    let rates = RatesClient::with_base_url(&server.url()).unwrap();
    (App::new(db, rates), server)
}

/// Create a user with one account, returning (user_id, account_id)
fn create_test_account(app: &App) -> (i64, i64) {
    let user = commands::cmd_users_add(app, "alice").unwrap();
    let account = commands::cmd_accounts_add(app, user, "Broker", "Alice").unwrap();
    (user, account)
}

// ========== Core Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a long account name", 10), "a long ...");
    assert_eq!(truncate("Zürich Köln Genève", 9), "Zürich...");
}

#[test]
fn test_normalize_currency() {
    assert_eq!(normalize_currency(" usd "), "USD");
    assert_eq!(normalize_currency("Eur"), "EUR");
}

#[test]
fn test_resolve_db_path_prefers_explicit() {
    let path = std::path::Path::new("/tmp/explicit.db");
    assert_eq!(commands::resolve_db_path(Some(path)).unwrap(), path);
}

#[test]
fn test_open_app_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("tally.db");

    let app = commands::open_app(&db_path, &Settings::default()).unwrap();
    assert!(db_path.exists());
    commands::cmd_init(&app).unwrap();
}

// ========== Users / Accounts / Cash Tests ==========

#[test]
fn test_cmd_users_add_and_list() {
    let app = setup_test_app();

    commands::cmd_users_list(&app, false).unwrap();
    let id = commands::cmd_users_add(&app, "  bob  ").unwrap();
    commands::cmd_users_list(&app, true).unwrap();

    let users = app.db().list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, id);
    assert_eq!(users[0].name, "bob");
}

#[test]
fn test_cmd_users_add_rejects_blank_name() {
    let app = setup_test_app();
    assert!(commands::cmd_users_add(&app, "   ").is_err());
    assert!(app.db().list_users().unwrap().is_empty());
}

#[test]
fn test_cmd_accounts_add_list_delete() {
    let app = setup_test_app();
    let (user, account) = create_test_account(&app);

    commands::cmd_cash_set(&app, account, 250.0, "usd").unwrap();
    commands::cmd_investments_add(&app, account, "World ETF", "Stocks", 1000.0, "EUR").unwrap();
    commands::cmd_accounts_list(&app, user, false).unwrap();
    commands::cmd_accounts_list(&app, user, true).unwrap();

    commands::cmd_accounts_delete(&app, account).unwrap();
    assert!(app.fetch_account_details(user).unwrap().is_empty());
    assert!(app.db().get_cash(account).unwrap().is_none());
    assert!(app.db().list_investments(account).unwrap().is_empty());
}

#[test]
fn test_cmd_accounts_delete_missing_is_ok() {
    let app = setup_test_app();
    commands::cmd_accounts_delete(&app, 404).unwrap();
}

#[test]
fn test_cmd_cash_set_overwrites() {
    let app = setup_test_app();
    let (_, account) = create_test_account(&app);

    commands::cmd_cash_set(&app, account, 10.0, "EUR").unwrap();
    commands::cmd_cash_set(&app, account, -5.5, "GBP").unwrap();

    let cash = app.db().get_cash(account).unwrap().unwrap();
    assert_eq!(cash.amount, -5.5);
    assert_eq!(cash.currency, "GBP");
}

#[test]
fn test_cmd_cash_and_investments_store_uppercase_codes() {
    let app = setup_test_app();
    let (_, account) = create_test_account(&app);

    commands::cmd_cash_set(&app, account, 10.0, " gbp ").unwrap();
    let id = commands::cmd_investments_add(&app, account, "ETF", "Stocks", 1.0, "usd").unwrap();

    assert_eq!(app.db().get_cash(account).unwrap().unwrap().currency, "GBP");
    assert_eq!(app.db().list_investments(account).unwrap()[0].currency, "USD");

    commands::cmd_investments_update(&app, id, "ETF", "Stocks", 2.0, "chf").unwrap();
    assert_eq!(app.db().list_investments(account).unwrap()[0].currency, "CHF");
}

#[test]
fn test_cmd_cash_set_rejects_nan() {
    let app = setup_test_app();
    let (_, account) = create_test_account(&app);
    assert!(commands::cmd_cash_set(&app, account, f64::NAN, "EUR").is_err());
    assert!(app.db().get_cash(account).unwrap().is_none());
}

// ========== Investments / Categories Tests ==========

#[test]
fn test_cmd_investments_add_update_delete() {
    let app = setup_test_app();
    let (_, account) = create_test_account(&app);

    let id = commands::cmd_investments_add(&app, account, "Bund", "Bonds", 200.0, "EUR").unwrap();
    commands::cmd_investments_update(&app, id, "Bund 2030", "Bonds", 210.0, "EUR").unwrap();

    let investments = app.db().list_investments(account).unwrap();
    assert_eq!(investments.len(), 1);
    assert_eq!(investments[0].name, "Bund 2030");
    assert_eq!(investments[0].amount, 210.0);

    commands::cmd_investments_delete(&app, id).unwrap();
    assert!(app.db().list_investments(account).unwrap().is_empty());
}

#[test]
fn test_cmd_categories_add_and_list() {
    let app = setup_test_app();
    let (user, _) = create_test_account(&app);

    commands::cmd_categories_list(&app, user, false).unwrap();
    commands::cmd_categories_add(&app, user, "Stocks").unwrap();
    commands::cmd_categories_add(&app, user, " Bonds ").unwrap();
    commands::cmd_categories_list(&app, user, true).unwrap();

    assert_eq!(app.fetch_categories(user).unwrap(), vec!["Stocks", "Bonds"]);
    assert!(commands::cmd_categories_add(&app, user, "").is_err());
}

// ========== Reports Tests ==========

#[tokio::test]
async fn test_cmd_rates_uppercases_codes() {
    let (app, _server) = setup_with_rates().await;
    commands::cmd_rates(&app, "eur", &["usd".to_string(), "gbp".to_string()], false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cmd_rates_missing_target_fails() {
    let (app, _server) = setup_with_rates().await;
    let result = commands::cmd_rates(&app, "EUR", &["XYZ".to_string()], true).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_cmd_portfolio_overall_and_account() {
    let (app, _server) = setup_with_rates().await;
    let (user, account) = create_test_account(&app);
    commands::cmd_cash_set(&app, account, 50.0, "EUR").unwrap();
    commands::cmd_investments_add(&app, account, "S&P 500", "Stocks", 125.0, "USD").unwrap();

    commands::cmd_portfolio(&app, user, None, "eur", false).await.unwrap();
    commands::cmd_portfolio(&app, user, Some(account), "EUR", true).await.unwrap();
    assert!(commands::cmd_portfolio(&app, user, Some(999), "EUR", false)
        .await
        .is_err());
}

#[tokio::test]
async fn test_cmd_portfolio_with_lowercase_input_codes() {
    let (app, _server) = setup_with_rates().await;
    let (user, account) = create_test_account(&app);
    commands::cmd_cash_set(&app, account, 125.0, "usd").unwrap();
    commands::cmd_investments_add(&app, account, "Gilts", "Bonds", 80.0, "gbp").unwrap();

    commands::cmd_portfolio(&app, user, None, "eur", false).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("stats.csv");
    commands::cmd_export(&app, &output, user, None, "eur").await.unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[1], "Bonds,100.00,EUR,50.00");
    assert_eq!(lines[2], "Cash,100.00,EUR,50.00");
}

#[tokio::test]
async fn test_cmd_portfolio_empty_user() {
    let app = setup_test_app();
    commands::cmd_portfolio(&app, 42, None, "EUR", false).await.unwrap();
}

#[tokio::test]
async fn test_cmd_export_writes_csv() {
    let (app, _server) = setup_with_rates().await;
    let (user, account) = create_test_account(&app);
    commands::cmd_cash_set(&app, account, 100.0, "EUR").unwrap();
    commands::cmd_investments_add(&app, account, "S&P 500", "Stocks", 375.0, "USD").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("stats.csv");
    commands::cmd_export(&app, &output, user, None, "EUR").await.unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Stocks,300.00,EUR,75.00");
    assert_eq!(lines[2], "Cash,100.00,EUR,25.00");
}
