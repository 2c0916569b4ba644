//! Signalcraft API Server
//!
//! Exposes analysis, strategy validation, strategy storage and backtesting
//! over HTTP. Price data arrives in request bodies.

use dotenvy::dotenv;
use signalcraft::config::{get_environment, get_port, Config};
use signalcraft::core::http::start_server;
use signalcraft::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let port = get_port();

    info!(environment = %get_environment(), "Starting Signalcraft API Server");
    info!(
        rsi_oversold = config.signals.rsi_oversold,
        rsi_overbought = config.signals.rsi_overbought,
        warmup_bars = config.backtest.warmup_bars,
        forward_bars = config.backtest.forward_bars,
        "Engine configuration"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config, port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
