//! Bollinger Bands indicator

use crate::models::bar::Bar;
use crate::models::indicators::BollingerBandsIndicator;
use std::collections::VecDeque;

/// Rolling Bollinger Bands.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// Standard deviation is the population deviation of the window.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev: f64,
    window: VecDeque<f64>,
}

impl BollingerBands {
    pub fn new(period: usize, std_dev: f64) -> Self {
        Self {
            period,
            std_dev,
            window: VecDeque::with_capacity(period + 1),
        }
    }

    pub fn update(&mut self, close: f64) -> Option<BollingerBandsIndicator> {
        self.window.push_back(close);
        if self.window.len() > self.period {
            self.window.pop_front();
        }
        self.value()
    }

    pub fn value(&self) -> Option<BollingerBandsIndicator> {
        if self.period == 0 || self.window.len() < self.period {
            return None;
        }
        let n = self.period as f64;
        let middle = self.window.iter().sum::<f64>() / n;
        let variance = self
            .window
            .iter()
            .map(|close| (close - middle).powi(2))
            .sum::<f64>()
            / n;
        let band = self.std_dev * variance.sqrt();

        Some(BollingerBandsIndicator {
            upper: middle + band,
            middle,
            lower: middle - band,
        })
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new(20, 2.0)
    }
}

/// Calculate Bollinger Bands as of the last bar.
pub fn calculate_bollinger_bands(
    bars: &[Bar],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    let mut bands = BollingerBands::new(period, std_dev);
    bars.iter().fold(None, |_, bar| bands.update(bar.close))
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(bars: &[Bar]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(bars, 20, 2.0)
}
