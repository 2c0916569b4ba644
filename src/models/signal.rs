use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiSignal {
    Oversold,
    Overbought,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdSignal {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeSignal {
    High,
    Low,
    Normal,
}

impl fmt::Display for RsiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsiSignal::Oversold => f.write_str("Oversold - Potential Buy"),
            RsiSignal::Overbought => f.write_str("Overbought - Potential Sell"),
            RsiSignal::Neutral => f.write_str("Neutral"),
        }
    }
}

impl fmt::Display for MacdSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacdSignal::Bullish => f.write_str("Bullish"),
            MacdSignal::Bearish => f.write_str("Bearish"),
        }
    }
}

impl fmt::Display for VolumeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeSignal::High => f.write_str("Unusual volume - High"),
            VolumeSignal::Low => f.write_str("Unusual volume - Low"),
            VolumeSignal::Normal => f.write_str("Normal"),
        }
    }
}

/// Categorical signal per indicator family.
///
/// A family is `None` when the indicator it derives from is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    #[serde(rename = "RSI")]
    pub rsi: Option<RsiSignal>,
    #[serde(rename = "MACD")]
    pub macd: Option<MacdSignal>,
    #[serde(rename = "Volume")]
    pub volume: VolumeSignal,
}

/// Volume inputs to the signal mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeStats {
    pub volume: f64,
    pub avg_volume_10d: f64,
}

/// Basic statistics reported alongside indicators for the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub current_price: f64,
    /// Percent change against the previous close; `None` with a single bar.
    pub daily_return: Option<f64>,
    pub volume: f64,
    pub avg_volume_10d: f64,
}

impl MarketStats {
    pub fn volume_stats(&self) -> VolumeStats {
        VolumeStats {
            volume: self.volume,
            avg_volume_10d: self.avg_volume_10d,
        }
    }
}
