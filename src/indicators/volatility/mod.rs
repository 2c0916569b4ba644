//! Volatility indicators: Bollinger Bands (20, 2σ), Wilder ATR

pub mod atr;
pub mod bollinger;

pub use atr::*;
pub use bollinger::*;
