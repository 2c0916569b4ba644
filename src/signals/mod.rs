//! Signal evaluation interfaces.

pub mod engine;
pub mod signal_generator;

pub use engine::{AnalysisError, AnalysisReport, SignalEngine};
pub use signal_generator::SignalGenerator;
