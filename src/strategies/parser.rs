//! Strict conversion of loosely-typed strategy objects into [`Strategy`].

use serde_json::Value;
use thiserror::Error;

use crate::models::strategy::{IndicatorKind, Strategy, StrategyCondition};
use crate::strategies::validator::{field_value, threshold_value};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Strategy must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Convert a strategy object into a typed [`Strategy`].
///
/// Does not apply indicator-specific range checks; that is the validator's job.
pub fn parse_strategy(input: &Value) -> Result<Strategy, ParseError> {
    if !input.is_object() {
        return Err(ParseError::NotAnObject);
    }

    let ticker = required_str(input, "ticker")?.trim();
    if ticker.is_empty() {
        return Err(invalid("ticker", "must not be empty"));
    }

    let indicator = required_str(input, "indicator")?;
    let indicator = indicator
        .parse::<IndicatorKind>()
        .map_err(|_| invalid("indicator", format!("unknown indicator '{}'", indicator)))?;

    let condition = required_str(input, "condition")?;
    let condition = condition
        .parse::<StrategyCondition>()
        .map_err(|_| invalid("condition", format!("unknown condition '{}'", condition)))?;

    let threshold = field_value(input, "threshold")
        .ok_or(ParseError::MissingField("threshold"))?;
    let threshold = threshold_value(threshold)
        .filter(|t| t.is_finite())
        .ok_or_else(|| invalid("threshold", format!("not a number: {}", threshold)))?;

    let timeframe = match field_value(input, "timeframe") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(invalid(
                "timeframe",
                format!("expected a string, got {}", other),
            ))
        }
    };

    Ok(Strategy {
        ticker: ticker.to_string(),
        indicator,
        condition,
        threshold,
        timeframe,
    })
}

fn required_str<'a>(input: &'a Value, field: &'static str) -> Result<&'a str, ParseError> {
    field_value(input, field)
        .ok_or(ParseError::MissingField(field))?
        .as_str()
        .ok_or_else(|| invalid(field, "expected a string"))
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ParseError {
    ParseError::InvalidField {
        field,
        reason: reason.into(),
    }
}
