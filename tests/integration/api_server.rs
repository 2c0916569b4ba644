//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and the analysis,
//! validation, backtest and strategy routes.


use serde_json::{json, Value};
use signalcraft::config::Config;
use signalcraft::core::http::{AppState, HealthStatus};
use signalcraft::metrics::Metrics;
use std::sync::Arc;

use test_utils::{bars_from_closes, falling_bars, rsi_strategy, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "signalcraft");
}

#[tokio::test]
async fn health_endpoint_reports_configured_status() {
    let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
    let mut state = AppState::new(Config::default(), metrics);
    state.health = HealthStatus {
        status: "degraded".to_string(),
    };
    let app = TestApiServer::with_state(state);

    let body: Value = app.server.get("/health").await.json();
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    for name in [
        "http_requests_total",
        "http_request_duration_seconds",
        "http_requests_in_flight",
        "backtests_total",
        "backtest_signals_total",
    ] {
        assert!(body.contains(name), "Expected {} metric", name);
    }
}

#[tokio::test]
async fn metrics_track_request_count() {
    let app = TestApiServer::new().await;
    for _ in 0..3 {
        let _ = app.server.get("/health").await;
    }
    assert_eq!(app.metrics.http_requests_total.get(), 3);
}

#[tokio::test]
async fn validate_endpoint_reports_all_problems() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies/validate")
        .json(&json!({
            "strategy": {
                "ticker": "AAPL",
                "indicator": "RSI",
                "condition": "sideways",
                "threshold": 150
            }
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert_eq!(body["suggested_parameters"]["oversold"], 30.0);
    assert_eq!(body["suggested_parameters"]["overbought"], 70.0);
}

#[tokio::test]
async fn validate_endpoint_accepts_valid_strategy() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies/validate")
        .json(&json!({ "strategy": rsi_strategy("below", 30.0) }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn backtest_endpoint_runs_valid_strategy() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/backtest")
        .json(&json!({
            "strategy": rsi_strategy("below", 30.0),
            "bars": falling_bars(100)
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["validation"]["is_valid"], true);
    assert_eq!(body["backtest"]["total_signals"], 80);
    assert_eq!(body["backtest"]["win_rate"], 0.0);
    assert_eq!(app.metrics.backtests_total.get(), 1);
    assert_eq!(app.metrics.backtest_signals_total.get(), 80);
}

#[tokio::test]
async fn backtest_endpoint_skips_invalid_strategy() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/backtest")
        .json(&json!({
            "strategy": { "ticker": "AAPL" },
            "bars": falling_bars(30)
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["validation"]["is_valid"], false);
    assert_eq!(body["validation"]["messages"].as_array().unwrap().len(), 3);
    assert!(body["backtest"].is_null());
    assert_eq!(app.metrics.backtests_total.get(), 0);
}

#[tokio::test]
async fn backtest_endpoint_reports_missing_history() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/backtest")
        .json(&json!({ "strategy": rsi_strategy("below", 30.0) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(
        body["backtest"],
        json!({ "error": "No price history available for AAPL" })
    );
}

#[tokio::test]
async fn backtest_endpoint_rejects_out_of_order_bars() {
    let app = TestApiServer::new().await;
    let mut bars = bars_from_closes(&[100.0; 30]);
    bars.swap(3, 4);

    let response = app
        .server
        .post("/api/backtest")
        .json(&json!({
            "strategy": rsi_strategy("below", 30.0),
            "bars": bars
        }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn analyze_endpoint_returns_report() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({
            "ticker": "AAPL",
            "bars": bars_from_closes(&[100.0; 60])
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["technical_indicators"]["RSI"], 50.0);
    assert_eq!(body["signals"]["RSI"], "Neutral");
    assert_eq!(body["signals"]["MACD"], "Bearish");
    assert_eq!(body["signals"]["Volume"], "Normal");
    assert_eq!(body["statistics"]["current_price"], 100.0);
}

#[tokio::test]
async fn analyze_endpoint_without_bars_is_not_found() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "ticker": "ZZZZ" }))
        .await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"], "No data found for ticker ZZZZ");
}

#[tokio::test]
async fn strategy_lifecycle() {
    let app = TestApiServer::new().await;

    let created = app
        .server
        .post("/api/strategies")
        .json(&json!({ "strategy": rsi_strategy("above", 70.0) }))
        .await;
    assert_eq!(created.status_code(), 201);
    let created: Value = created.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["strategy"]["indicator"], "RSI");
    assert_eq!(created["validation"]["is_valid"], true);

    let fetched = app.server.get(&format!("/api/strategies/{}", id)).await;
    assert_eq!(fetched.status_code(), 200);
    let fetched: Value = fetched.json();
    assert_eq!(fetched["strategy"]["condition"], "above");

    let listed: Value = app.server.get("/api/strategies").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let deleted = app.server.delete(&format!("/api/strategies/{}", id)).await;
    assert_eq!(deleted.status_code(), 204);

    let missing = app.server.get(&format!("/api/strategies/{}", id)).await;
    assert_eq!(missing.status_code(), 404);
    let deleted_again = app.server.delete(&format!("/api/strategies/{}", id)).await;
    assert_eq!(deleted_again.status_code(), 404);
}

#[tokio::test]
async fn invalid_strategy_is_not_stored() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies")
        .json(&json!({ "strategy": rsi_strategy("below", 120.0) }))
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["validation"]["is_valid"], false);

    let listed: Value = app.server.get("/api/strategies").await.json();
    assert_eq!(listed, json!([]));
}

fn macd_strategy_with_threshold(threshold: Value) -> Value {
    json!({
        "ticker": "AAPL",
        "indicator": "MACD",
        "condition": "above",
        "threshold": threshold
    })
}

#[tokio::test]
async fn backtest_reports_untyped_threshold_separately_from_validation() {
    let app = TestApiServer::new().await;
    let strategy = macd_strategy_with_threshold(json!("abc"));

    let validated: Value = app
        .server
        .post("/api/strategies/validate")
        .json(&json!({ "strategy": strategy }))
        .await
        .json();
    assert_eq!(validated["is_valid"], true);

    let response = app
        .server
        .post("/api/backtest")
        .json(&json!({ "strategy": strategy, "bars": falling_bars(30) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["validation"], validated);
    assert_eq!(body["parse_error"], "Invalid threshold: not a number: \"abc\"");
    assert!(body["backtest"].is_null());
    assert_eq!(app.metrics.backtests_total.get(), 0);
}

#[tokio::test]
async fn backtest_omits_parse_error_when_strategy_is_typed() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/backtest")
        .json(&json!({
            "strategy": macd_strategy_with_threshold(json!(0.5)),
            "bars": falling_bars(30)
        }))
        .await;

    let body: Value = response.json();
    assert!(body.get("parse_error").is_none());
    assert_eq!(body["backtest"]["total_signals"], 0);
}

#[tokio::test]
async fn untyped_threshold_is_not_stored() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/strategies")
        .json(&json!({ "strategy": macd_strategy_with_threshold(json!("abc")) }))
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["validation"]["is_valid"], true);
    assert!(body["parse_error"].as_str().unwrap().starts_with("Invalid threshold"));

    let listed: Value = app.server.get("/api/strategies").await.json();
    assert_eq!(listed, json!([]));
}
