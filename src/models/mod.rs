//! Shared data models spanning the engine layers.

pub mod backtest;
pub mod bar;
pub mod indicators;
pub mod signal;
pub mod strategy;

pub use backtest::{BacktestOutcome, BacktestResult};
pub use bar::{is_chronological, Bar};
pub use indicators::{BollingerBandsIndicator, IndicatorName, IndicatorSet, MacdIndicator};
pub use signal::{MacdSignal, MarketStats, RsiSignal, SignalSet, VolumeSignal, VolumeStats};
pub use strategy::{IndicatorKind, Strategy, StrategyCondition, ValidationResult};
