//! Test utilities for tally-core
//!
//! This module provides a mock exchange-rate server that speaks the
//! `/v4/latest/{base}` API, for unit and integration tests.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Base currency for which the mock answers with a body lacking `rates`
pub const MALFORMED_BASE: &str = "BROKEN";

/// Mock exchange-rate server for testing
pub struct MockRatesServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockRatesServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new().route("/v4/latest/:base", get(handle_latest));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockRatesServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fixed rate tables keyed by base currency
fn rates_for(base: &str) -> Option<serde_json::Value> {
    match base {
        "USD" => Some(json!({
            "USD": 1.0,
            "EUR": 0.92,
            "JPY": 151.3,
            "GBP": 0.79,
            "CHF": 0.88,
            "VES": null
        })),
        "EUR" => Some(json!({
            "EUR": 1.0,
            "USD": 1.25,
            "GBP": 0.8,
            "JPY": 160.0,
            "CHF": 0.5
        })),
        _ => None,
    }
}

/// Latest rates endpoint
async fn handle_latest(Path(base): Path<String>) -> Response {
    if base == MALFORMED_BASE {
        return Json(json!({ "result": "error", "error-type": "unsupported-code" }))
            .into_response();
    }

    match rates_for(&base) {
        Some(rates) => Json(json!({
            "provider": "mock",
            "base": base,
            "date": "2024-01-15",
            "time_last_updated": 1705276800,
            "rates": rates
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "result": "error", "error-type": "unsupported-code" })),
        )
            .into_response(),
    }
}
