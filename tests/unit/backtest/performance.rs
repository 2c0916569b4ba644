//! Unit tests for backtest performance statistics

use signalcraft::backtest::performance::{sharpe_ratio, summarize, win_rate};
use signalcraft::models::backtest::BacktestResult;

#[test]
fn test_empty_returns_are_zero() {
    assert_eq!(summarize(&[]), BacktestResult::default());
    assert_eq!(win_rate(&[]), 0.0);
    assert_eq!(sharpe_ratio(&[]), 0.0);
}

#[test]
fn test_single_return() {
    let result = summarize(&[0.05]);
    assert_eq!(result.total_signals, 1);
    assert!((result.avg_return - 5.0).abs() < 1e-9);
    assert_eq!(result.win_rate, 1.0);
    assert_eq!(result.sharpe_ratio, 0.0);
}

#[test]
fn test_mixed_returns() {
    let returns = [0.02, -0.01, 0.03, 0.0];
    let result = summarize(&returns);

    assert_eq!(result.total_signals, 4);
    assert!((result.avg_return - 1.0).abs() < 1e-9);
    // zero is not a win
    assert_eq!(result.win_rate, 0.5);

    let mean = 0.01;
    let variance = (0.01f64.powi(2) + 0.02f64.powi(2) + 0.02f64.powi(2) + 0.01f64.powi(2)) / 4.0;
    let std = variance.sqrt();
    assert!((result.sharpe_ratio - mean / std).abs() < 1e-9);
}

#[test]
fn test_identical_returns_have_zero_sharpe() {
    assert_eq!(sharpe_ratio(&[0.01, 0.01, 0.01]), 0.0);
}

#[test]
fn test_negative_sharpe() {
    assert!(sharpe_ratio(&[-0.02, -0.04]) < 0.0);
}
