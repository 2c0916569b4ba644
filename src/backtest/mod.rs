//! Historical replay of strategies.

pub mod engine;
pub mod performance;

pub use engine::{is_wired, strategy_matches, BacktestError, Backtester, Trigger};
