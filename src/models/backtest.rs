use serde::{Deserialize, Serialize};

/// Aggregated performance of a strategy over a price series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BacktestResult {
    pub total_signals: usize,
    /// Mean forward return, in percent.
    pub avg_return: f64,
    /// Fraction of triggers with a positive forward return, in [0, 1].
    pub win_rate: f64,
    pub sharpe_ratio: f64,
}

/// Either computed metrics or a description of why none could be computed.
///
/// A strategy that never triggered is `Completed` with all-zero metrics;
/// missing data is `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BacktestOutcome {
    Completed(BacktestResult),
    Failed { error: String },
}

impl BacktestOutcome {
    pub fn result(&self) -> Option<&BacktestResult> {
        match self {
            BacktestOutcome::Completed(result) => Some(result),
            BacktestOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BacktestOutcome::Completed(_) => None,
            BacktestOutcome::Failed { error } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BacktestOutcome::Failed { .. })
    }
}
