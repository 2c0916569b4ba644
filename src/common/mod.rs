//! Shared helpers used across indicator and backtest code.

pub mod math;
