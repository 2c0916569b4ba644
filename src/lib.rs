//! Signal generation and strategy backtesting engine.
//!
//! Bars flow through the indicator calculators, get mapped to categorical
//! signals, and are replayed by the backtester against a validated strategy.

pub mod backtest;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;
pub mod strategies;
