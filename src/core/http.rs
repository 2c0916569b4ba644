//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::backtest::Backtester;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::models::backtest::BacktestOutcome;
use crate::models::bar::{is_chronological, Bar};
use crate::models::strategy::ValidationResult;
use crate::signals::{AnalysisReport, SignalEngine, SignalGenerator};
use crate::strategies::{
    parse_strategy, InMemoryStrategyStore, StoredStrategy, StrategyId, StrategyStore,
    StrategyValidator,
};

type ApiError = (StatusCode, Json<Value>);

#[derive(Clone)]
pub struct AppState {
    pub health: HealthStatus,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub config: Config,
    pub store: Arc<dyn StrategyStore>,
}

impl AppState {
    pub fn new(config: Config, metrics: Arc<Metrics>) -> Self {
        Self {
            health: HealthStatus::default(),
            metrics,
            start_time: Arc::new(Instant::now()),
            config,
            store: Arc::new(InMemoryStrategyStore::new()),
        }
    }

    fn signal_generator(&self) -> SignalGenerator {
        SignalGenerator::new(self.config.signals)
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn ensure_chronological(bars: &[Bar]) -> Result<(), ApiError> {
    if is_chronological(bars) {
        Ok(())
    } else {
        Err(error_body(
            StatusCode::BAD_REQUEST,
            "bars must be strictly increasing by timestamp",
        ))
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": state.health.status,
        "uptime_seconds": uptime_seconds,
        "service": "signalcraft"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub ticker: String,
    #[serde(default)]
    pub bars: Vec<Bar>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub strategy: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub strategy: Value,
    #[serde(default)]
    pub bars: Vec<Bar>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BacktestResponse {
    pub validation: ValidationResult,
    /// Set when the strategy passed validation but could not be typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
    pub backtest: Option<BacktestOutcome>,
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    ensure_chronological(&request.bars)?;
    let engine = SignalEngine::new(state.signal_generator());
    engine
        .analyze(&request.ticker, &request.bars)
        .map(Json)
        .map_err(|e| error_body(StatusCode::NOT_FOUND, e.to_string()))
}

async fn validate_strategy(Json(request): Json<StrategyRequest>) -> Json<ValidationResult> {
    Json(StrategyValidator::validate(&request.strategy))
}

/// Validate, then backtest only when validation passed.
async fn run_backtest(
    State(state): State<AppState>,
    Json(request): Json<BacktestRequest>,
) -> Result<Json<BacktestResponse>, ApiError> {
    let validation = StrategyValidator::validate(&request.strategy);
    if !validation.is_valid {
        return Ok(Json(BacktestResponse {
            validation,
            parse_error: None,
            backtest: None,
        }));
    }

    let strategy = match parse_strategy(&request.strategy) {
        Ok(strategy) => strategy,
        Err(e) => {
            return Ok(Json(BacktestResponse {
                validation,
                parse_error: Some(e.to_string()),
                backtest: None,
            }));
        }
    };
    ensure_chronological(&request.bars)?;

    let backtester = Backtester::new(state.config.backtest, state.signal_generator());
    let bars = request.bars;
    let outcome = tokio::task::spawn_blocking(move || backtester.run(&strategy, &bars))
        .await
        .map_err(|e| {
            error!(error = %e, "backtest task failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "backtest task failed")
        })?;

    state.metrics.backtests_total.inc();
    if let Some(result) = outcome.result() {
        state
            .metrics
            .backtest_signals_total
            .inc_by(result.total_signals as u64);
    }

    Ok(Json(BacktestResponse {
        validation,
        parse_error: None,
        backtest: Some(outcome),
    }))
}

/// Validate, parse and store a strategy.
async fn create_strategy(
    State(state): State<AppState>,
    Json(request): Json<StrategyRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let validation = StrategyValidator::validate(&request.strategy);
    if !validation.is_valid {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "validation": validation })),
        ));
    }

    let strategy = parse_strategy(&request.strategy).map_err(|e| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "validation": &validation, "parse_error": e.to_string() })),
        )
    })?;

    let id = state.store.put(strategy.clone());
    info!(strategy_id = id, ticker = %strategy.ticker, "stored strategy");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": id,
            "strategy": strategy,
            "validation": validation,
        })),
    ))
}

async fn list_strategies(State(state): State<AppState>) -> Json<Vec<StoredStrategy>> {
    Json(state.store.list())
}

async fn get_strategy(
    State(state): State<AppState>,
    Path(id): Path<StrategyId>,
) -> Result<Json<StoredStrategy>, ApiError> {
    state
        .store
        .get(id)
        .map(Json)
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, format!("strategy {} not found", id)))
}

async fn delete_strategy(
    State(state): State<AppState>,
    Path(id): Path<StrategyId>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(error_body(
            StatusCode::NOT_FOUND,
            format!("strategy {} not found", id),
        ))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze))
        .route("/api/backtest", post(run_backtest))
        .route("/api/strategies/validate", post(validate_strategy))
        .route("/api/strategies", get(list_strategies).post(create_strategy))
        .route(
            "/api/strategies/{id}",
            get(get_strategy).delete(delete_strategy),
        )
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: Config,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new().map_err(|e| e.to_string())?);
    let state = AppState::new(config, metrics);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
