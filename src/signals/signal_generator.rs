use crate::config::SignalThresholds;
use crate::models::indicators::{IndicatorSet, MacdIndicator};
use crate::models::signal::{MacdSignal, RsiSignal, SignalSet, VolumeSignal, VolumeStats};

/// Stateless mapping from indicator values to categorical signals.
///
/// Each family is decided independently of the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator {
    thresholds: SignalThresholds,
}

impl SignalGenerator {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    pub fn generate(&self, indicators: &IndicatorSet, stats: &VolumeStats) -> SignalSet {
        SignalSet {
            rsi: indicators.rsi.map(|rsi| self.analyze_rsi(rsi)),
            macd: indicators.macd.as_ref().map(|macd| self.analyze_macd(macd)),
            volume: self.analyze_volume(stats),
        }
    }

    /// Strict comparisons: exactly 30 or 70 is Neutral.
    pub fn analyze_rsi(&self, rsi: f64) -> RsiSignal {
        if rsi < self.thresholds.rsi_oversold {
            RsiSignal::Oversold
        } else if rsi > self.thresholds.rsi_overbought {
            RsiSignal::Overbought
        } else {
            RsiSignal::Neutral
        }
    }

    /// Equal lines count as Bearish.
    pub fn analyze_macd(&self, macd: &MacdIndicator) -> MacdSignal {
        if macd.macd > macd.signal {
            MacdSignal::Bullish
        } else {
            MacdSignal::Bearish
        }
    }

    pub fn analyze_volume(&self, stats: &VolumeStats) -> VolumeSignal {
        if stats.volume > stats.avg_volume_10d * self.thresholds.volume_high_ratio {
            VolumeSignal::High
        } else if stats.volume < stats.avg_volume_10d * self.thresholds.volume_low_ratio {
            VolumeSignal::Low
        } else {
            VolumeSignal::Normal
        }
    }
}
