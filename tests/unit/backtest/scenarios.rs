//! Scenario tests for end-to-end backtests

use chrono::{Duration, TimeZone, Utc};
use signalcraft::backtest::Backtester;
use signalcraft::models::bar::Bar;
use signalcraft::models::strategy::{IndicatorKind, Strategy, StrategyCondition};

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let timestamp = start + Duration::days(i as i64);
            Bar::new(
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000.0,
                timestamp,
            )
        })
        .collect()
}

fn rsi_strategy(condition: StrategyCondition, threshold: f64) -> Strategy {
    Strategy {
        ticker: "AAPL".to_string(),
        indicator: IndicatorKind::Rsi,
        condition,
        threshold,
        timeframe: Some("1d".to_string()),
    }
}

/// Choppy range, a single sharp drop at bar 100, then a slow recovery.
fn crash_and_recover_closes() -> Vec<f64> {
    (0..300)
        .map(|i| match i {
            0..=99 if i % 2 == 0 => 100.0,
            0..=99 => 101.0,
            100 => 85.0,
            101..=105 => 89.25,
            _ => 89.25 + 0.25 * (i - 105) as f64,
        })
        .collect()
}

#[test]
fn test_flat_market_never_triggers() {
    let bars = bars_from_closes(&[100.0; 60]);
    for condition in [StrategyCondition::Below, StrategyCondition::Above] {
        let outcome = Backtester::default().run(&rsi_strategy(condition, 30.0), &bars);
        let result = outcome.result().unwrap();
        assert_eq!(result.total_signals, 0);
        assert_eq!(result.avg_return, 0.0);
        assert_eq!(result.win_rate, 0.0);
        assert_eq!(result.sharpe_ratio, 0.0);
    }
}

#[test]
fn test_single_oversold_dip() {
    let bars = bars_from_closes(&crash_and_recover_closes());
    let strategy = rsi_strategy(StrategyCondition::Below, 30.0);

    let triggers = Backtester::default().triggers(&strategy, &bars).unwrap();
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].index, 100);
    assert!((triggers[0].forward_return - 0.05).abs() < 1e-9);

    let result = *Backtester::default().run(&strategy, &bars).result().unwrap();
    assert_eq!(result.total_signals, 1);
    assert!((result.avg_return - 5.0).abs() < 1e-6);
    assert_eq!(result.win_rate, 1.0);
    assert_eq!(result.sharpe_ratio, 0.0);
}

#[test]
fn test_outcome_serializes_flat() {
    let bars = bars_from_closes(&crash_and_recover_closes());
    let outcome = Backtester::default().run(&rsi_strategy(StrategyCondition::Below, 30.0), &bars);
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["total_signals"], 1);
    assert_eq!(json["win_rate"], 1.0);
    assert!(json.get("error").is_none());
}
