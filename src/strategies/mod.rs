//! Strategy validation, parsing and storage.

pub mod parser;
pub mod store;
pub mod validator;

pub use parser::{parse_strategy, ParseError};
pub use store::{InMemoryStrategyStore, StoredStrategy, StrategyId, StrategyStore};
pub use validator::StrategyValidator;
