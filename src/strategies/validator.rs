//! Consistency checks for strategy-shaped input.

use serde_json::Value;

use crate::models::strategy::{IndicatorKind, Strategy, StrategyCondition, ValidationResult};

pub const REQUIRED_FIELDS: [&str; 4] = ["ticker", "indicator", "condition", "threshold"];

pub const RSI_MIN: f64 = 0.0;
pub const RSI_MAX: f64 = 100.0;

pub struct StrategyValidator;

impl StrategyValidator {
    /// Check an untrusted strategy object.
    ///
    /// Missing fields are all reported together and stop validation there.
    /// Otherwise the indicator and condition are both checked, followed by
    /// the indicator-specific threshold range.
    pub fn validate(input: &Value) -> ValidationResult {
        let mut result = ValidationResult::valid();

        for field in REQUIRED_FIELDS {
            if field_value(input, field).is_none() {
                result.reject(format!("Missing required field: {}", field));
            }
        }
        if !result.is_valid {
            return result;
        }

        let indicator = field_value(input, "indicator")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<IndicatorKind>().ok());
        if indicator.is_none() {
            result.reject(format!(
                "Invalid indicator. Must be one of: {}",
                join(IndicatorKind::ALL.iter().map(IndicatorKind::as_str))
            ));
        }

        let condition = field_value(input, "condition")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<StrategyCondition>().ok());
        if condition.is_none() {
            result.reject(format!(
                "Invalid condition. Must be one of: {}",
                join(StrategyCondition::ALL.iter().map(StrategyCondition::as_str))
            ));
        }

        if indicator == Some(IndicatorKind::Rsi) {
            match field_value(input, "threshold").and_then(threshold_value) {
                Some(threshold) if (RSI_MIN..=RSI_MAX).contains(&threshold) => {}
                Some(_) => {
                    result.reject("RSI threshold must be between 0 and 100");
                    suggest_rsi_levels(&mut result);
                }
                None => {
                    result.reject("RSI threshold must be a number between 0 and 100");
                    suggest_rsi_levels(&mut result);
                }
            }
        }

        result
    }

    /// Validate an already-typed strategy.
    pub fn validate_strategy(strategy: &Strategy) -> ValidationResult {
        match serde_json::to_value(strategy) {
            Ok(value) => Self::validate(&value),
            Err(e) => {
                let mut result = ValidationResult::valid();
                result.reject(format!("Strategy could not be inspected: {}", e));
                result
            }
        }
    }
}

/// A field counts as present when the key exists and is not `null`.
pub(crate) fn field_value<'a>(input: &'a Value, field: &str) -> Option<&'a Value> {
    input.as_object()?.get(field).filter(|value| !value.is_null())
}

/// Accepts JSON numbers and numeric strings.
pub(crate) fn threshold_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn suggest_rsi_levels(result: &mut ValidationResult) {
    result.suggested_parameters.insert("oversold".to_string(), 30.0);
    result.suggested_parameters.insert("overbought".to_string(), 70.0);
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
