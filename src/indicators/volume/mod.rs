//! Volume indicators: OBV, trailing average volume

pub mod average;
pub mod obv;

pub use average::*;
pub use obv::*;
