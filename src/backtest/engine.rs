//! Chronological replay of a strategy over a price series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::backtest::performance;
use crate::config::BacktestConfig;
use crate::indicators::IndicatorEngine;
use crate::models::backtest::{BacktestOutcome, BacktestResult};
use crate::models::bar::Bar;
use crate::models::signal::{RsiSignal, SignalSet};
use crate::models::strategy::{IndicatorKind, Strategy, StrategyCondition};
use crate::signals::SignalGenerator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BacktestError {
    #[error("No price history available for {0}")]
    NoData(String),

    #[error("Invalid close price {close} at bar {index}")]
    InvalidPrice { index: usize, close: f64 },
}

/// A bar at which the strategy fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    /// Fractional return from this bar's close to the close `forward_bars` later.
    pub forward_return: f64,
}

/// Whether a strategy's indicator/condition pair can ever fire in a backtest.
///
/// Only RSI `below`/`above` map to a signal label. The other pairs pass
/// validation but never match.
pub fn is_wired(indicator: IndicatorKind, condition: StrategyCondition) -> bool {
    matches!(
        (indicator, condition),
        (IndicatorKind::Rsi, StrategyCondition::Below | StrategyCondition::Above)
    )
}

/// Does the strategy fire on these signals?
pub fn strategy_matches(strategy: &Strategy, signals: &SignalSet) -> bool {
    match (strategy.indicator, strategy.condition) {
        (IndicatorKind::Rsi, StrategyCondition::Below) => {
            signals.rsi == Some(RsiSignal::Oversold)
        }
        (IndicatorKind::Rsi, StrategyCondition::Above) => {
            signals.rsi == Some(RsiSignal::Overbought)
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Backtester {
    config: BacktestConfig,
    generator: SignalGenerator,
}

impl Backtester {
    pub fn new(config: BacktestConfig, generator: SignalGenerator) -> Self {
        Self { config, generator }
    }

    /// Run the strategy over `bars` and aggregate its forward returns.
    ///
    /// Never fails: missing data and bad prices come back as
    /// [`BacktestOutcome::Failed`].
    pub fn run(&self, strategy: &Strategy, bars: &[Bar]) -> BacktestOutcome {
        match self.triggers(strategy, bars) {
            Ok(triggers) => {
                let returns: Vec<f64> = triggers.iter().map(|t| t.forward_return).collect();
                let result: BacktestResult = performance::summarize(&returns);
                debug!(
                    ticker = %strategy.ticker,
                    bars = bars.len(),
                    total_signals = result.total_signals,
                    avg_return = result.avg_return,
                    "backtest completed"
                );
                BacktestOutcome::Completed(result)
            }
            Err(e) => {
                warn!(ticker = %strategy.ticker, error = %e, "backtest failed");
                BacktestOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Every bar from `warmup_bars` onward where the strategy fires.
    ///
    /// Indicators at bar `i` reflect `bars[0..=i]`, OBV included.
    pub fn triggers(
        &self,
        strategy: &Strategy,
        bars: &[Bar],
    ) -> Result<Vec<Trigger>, BacktestError> {
        let last = bars
            .len()
            .checked_sub(1)
            .ok_or_else(|| BacktestError::NoData(strategy.ticker.clone()))?;

        if !is_wired(strategy.indicator, strategy.condition) {
            warn!(
                ticker = %strategy.ticker,
                indicator = %strategy.indicator,
                condition = %strategy.condition,
                "condition is not matched during backtesting; no signals will be recorded"
            );
        }

        let mut engine = IndicatorEngine::new();
        let mut triggers = Vec::new();

        for (index, bar) in bars.iter().enumerate() {
            engine.push(bar);
            if index < self.config.warmup_bars {
                continue;
            }

            let Some(stats) = engine.stats() else {
                continue;
            };
            let signals = self
                .generator
                .generate(&engine.snapshot(), &stats.volume_stats());
            if !strategy_matches(strategy, &signals) {
                continue;
            }

            let exit_index = index.saturating_add(self.config.forward_bars).min(last);
            let forward_return = forward_return(bars, index, exit_index)?;
            triggers.push(Trigger {
                index,
                timestamp: bar.timestamp,
                forward_return,
            });
        }

        Ok(triggers)
    }
}

fn forward_return(bars: &[Bar], entry: usize, exit: usize) -> Result<f64, BacktestError> {
    let entry_close = bars[entry].close;
    if !entry_close.is_finite() || entry_close <= 0.0 {
        return Err(BacktestError::InvalidPrice {
            index: entry,
            close: entry_close,
        });
    }
    let exit_close = bars[exit].close;
    if !exit_close.is_finite() {
        return Err(BacktestError::InvalidPrice {
            index: exit,
            close: exit_close,
        });
    }
    Ok(exit_close / entry_close - 1.0)
}
