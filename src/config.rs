//! Runtime configuration with environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Cut-offs used when mapping indicator values to signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Volume above `avg * volume_high_ratio` is High.
    pub volume_high_ratio: f64,
    /// Volume below `avg * volume_low_ratio` is Low.
    pub volume_low_ratio: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            volume_high_ratio: 1.5,
            volume_low_ratio: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// First bar index evaluated.
    pub warmup_bars: usize,
    /// Bars ahead used for the forward return.
    pub forward_bars: usize,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            warmup_bars: 20,
            forward_bars: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub signals: SignalThresholds,
    pub backtest: BacktestConfig,
}

impl Config {
    /// Defaults overridden by any `SIGNAL_*` / `BACKTEST_*` variables that parse.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            signals: SignalThresholds {
                rsi_oversold: env_or("SIGNAL_RSI_OVERSOLD", defaults.signals.rsi_oversold),
                rsi_overbought: env_or("SIGNAL_RSI_OVERBOUGHT", defaults.signals.rsi_overbought),
                volume_high_ratio: env_or(
                    "SIGNAL_VOLUME_HIGH_RATIO",
                    defaults.signals.volume_high_ratio,
                ),
                volume_low_ratio: env_or(
                    "SIGNAL_VOLUME_LOW_RATIO",
                    defaults.signals.volume_low_ratio,
                ),
            },
            backtest: BacktestConfig {
                warmup_bars: env_or("BACKTEST_WARMUP_BARS", defaults.backtest.warmup_bars),
                forward_bars: env_or("BACKTEST_FORWARD_BARS", defaults.backtest.forward_bars),
            },
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Deployment environment name, from `APP_ENV` or `ENVIRONMENT`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .map(|value| value.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_port() -> u16 {
    env_or("PORT", 8080)
}
