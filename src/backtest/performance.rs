//! Aggregation of forward returns into performance statistics.

use crate::common::math;
use crate::models::backtest::BacktestResult;

/// Summarise fractional forward returns (0.05 = +5%).
///
/// `avg_return` is reported in percent. Every field is 0 for an empty list.
pub fn summarize(returns: &[f64]) -> BacktestResult {
    let Some(mean) = math::mean(returns) else {
        return BacktestResult::default();
    };

    BacktestResult {
        total_signals: returns.len(),
        avg_return: mean * 100.0,
        win_rate: win_rate(returns),
        sharpe_ratio: sharpe_ratio(returns),
    }
}

pub fn win_rate(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    returns.iter().filter(|r| **r > 0.0).count() as f64 / returns.len() as f64
}

/// Mean over population standard deviation, without annualisation.
///
/// Fewer than two returns, or zero dispersion, gives 0.
pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    match (math::mean(returns), math::population_std_dev(returns)) {
        (Some(mean), Some(std)) if std > 0.0 && std.is_finite() => mean / std,
        _ => 0.0,
    }
}
