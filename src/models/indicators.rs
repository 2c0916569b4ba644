use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Names of the indicators carried by an [`IndicatorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorName {
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "OBV")]
    Obv,
    #[serde(rename = "SMA_20")]
    Sma20,
    #[serde(rename = "SMA_50")]
    Sma50,
    #[serde(rename = "EMA_20")]
    Ema20,
    #[serde(rename = "ATR")]
    Atr,
}

impl IndicatorName {
    pub const ALL: [IndicatorName; 8] = [
        IndicatorName::Rsi,
        IndicatorName::Macd,
        IndicatorName::Bb,
        IndicatorName::Obv,
        IndicatorName::Sma20,
        IndicatorName::Sma50,
        IndicatorName::Ema20,
        IndicatorName::Atr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorName::Rsi => "RSI",
            IndicatorName::Macd => "MACD",
            IndicatorName::Bb => "BB",
            IndicatorName::Obv => "OBV",
            IndicatorName::Sma20 => "SMA_20",
            IndicatorName::Sma50 => "SMA_50",
            IndicatorName::Ema20 => "EMA_20",
            IndicatorName::Atr => "ATR",
        }
    }

    /// Bars required before the indicator produces a value.
    pub fn lookback(&self) -> usize {
        match self {
            IndicatorName::Rsi => 15,
            IndicatorName::Macd => 34,
            IndicatorName::Bb => 20,
            IndicatorName::Obv => 1,
            IndicatorName::Sma20 => 20,
            IndicatorName::Sma50 => 50,
            IndicatorName::Ema20 => 20,
            IndicatorName::Atr => 15,
        }
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most recent indicator values as of the last bar of a window.
///
/// `None` means the window was too short for that indicator; values are
/// never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(rename = "RSI")]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD")]
    pub macd: Option<MacdIndicator>,
    #[serde(rename = "BB")]
    pub bb: Option<BollingerBandsIndicator>,
    #[serde(rename = "OBV")]
    pub obv: Option<f64>,
    #[serde(rename = "SMA_20")]
    pub sma_20: Option<f64>,
    #[serde(rename = "SMA_50")]
    pub sma_50: Option<f64>,
    #[serde(rename = "EMA_20")]
    pub ema_20: Option<f64>,
    #[serde(rename = "ATR")]
    pub atr: Option<f64>,
}

impl IndicatorSet {
    pub fn is_available(&self, name: IndicatorName) -> bool {
        match name {
            IndicatorName::Rsi => self.rsi.is_some(),
            IndicatorName::Macd => self.macd.is_some(),
            IndicatorName::Bb => self.bb.is_some(),
            IndicatorName::Obv => self.obv.is_some(),
            IndicatorName::Sma20 => self.sma_20.is_some(),
            IndicatorName::Sma50 => self.sma_50.is_some(),
            IndicatorName::Ema20 => self.ema_20.is_some(),
            IndicatorName::Atr => self.atr.is_some(),
        }
    }

    pub fn unavailable(&self) -> Vec<IndicatorName> {
        IndicatorName::ALL
            .into_iter()
            .filter(|name| !self.is_available(*name))
            .collect()
    }
}
