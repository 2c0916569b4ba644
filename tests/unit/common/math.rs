//! Unit tests for shared math helpers

use signalcraft::common::math::{
    ema_from_previous, mean, population_std_dev, sma, true_range, wilder_from_previous,
};

#[test]
fn test_mean_empty_is_none() {
    assert!(mean(&[]).is_none());
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn test_sma_uses_trailing_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(sma(&values, 2), Some(4.5));
    assert!(sma(&values, 6).is_none());
    assert!(sma(&values, 0).is_none());
}

#[test]
fn test_population_std_dev() {
    let std = population_std_dev(&[1.0, 3.0, 1.0, 3.0]).unwrap();
    assert!((std - 1.0).abs() < 1e-12);
    assert_eq!(population_std_dev(&[5.0]), Some(0.0));
    assert!(population_std_dev(&[]).is_none());
}

#[test]
fn test_smoothing_steps() {
    assert!((ema_from_previous(21.0, 10.5, 20) - 11.5).abs() < 1e-12);
    assert!((wilder_from_previous(1.0, 0.5, 14) - 7.5 / 14.0).abs() < 1e-12);
}

#[test]
fn test_true_range_picks_largest_move() {
    assert_eq!(true_range(11.0, 9.0, 10.0), 2.0);
    assert_eq!(true_range(11.0, 10.5, 7.0), 4.0);
    assert_eq!(true_range(10.0, 9.0, 14.0), 5.0);
}
