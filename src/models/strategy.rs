//! Strategy data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Indicator families a strategy may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "BB")]
    Bb,
    Volume,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::Bb,
        IndicatorKind::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Bb => "BB",
            IndicatorKind::Volume => "Volume",
        }
    }
}

impl FromStr for IndicatorKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger condition relative to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCondition {
    Above,
    Below,
    CrossesAbove,
    CrossesBelow,
}

impl StrategyCondition {
    pub const ALL: [StrategyCondition; 4] = [
        StrategyCondition::Above,
        StrategyCondition::Below,
        StrategyCondition::CrossesAbove,
        StrategyCondition::CrossesBelow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyCondition::Above => "above",
            StrategyCondition::Below => "below",
            StrategyCondition::CrossesAbove => "crosses_above",
            StrategyCondition::CrossesBelow => "crosses_below",
        }
    }
}

impl FromStr for StrategyCondition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyCondition::ALL
            .into_iter()
            .find(|condition| condition.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for StrategyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A well-typed trading rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub ticker: String,
    pub indicator: IndicatorKind,
    pub condition: StrategyCondition,
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// Outcome of checking a strategy-shaped input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub messages: Vec<String>,
    pub suggested_parameters: BTreeMap<String, f64>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            messages: Vec::new(),
            suggested_parameters: BTreeMap::new(),
        }
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.messages.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
