//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::Ema;
use crate::models::bar::Bar;
use crate::models::indicators::MacdIndicator;

/// Streaming MACD.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast: Ema::new(fast_period),
            slow: Ema::new(slow_period),
            signal: Ema::new(signal_period),
        }
    }

    pub fn update(&mut self, close: f64) -> Option<MacdIndicator> {
        let fast = self.fast.update(close);
        let slow = self.slow.update(close);
        let (fast, slow) = fast.zip(slow)?;
        let macd = fast - slow;
        let signal = self.signal.update(macd)?;
        Some(MacdIndicator {
            macd,
            signal,
            histogram: macd - signal,
        })
    }

    pub fn value(&self) -> Option<MacdIndicator> {
        let macd = self.fast.value()? - self.slow.value()?;
        let signal = self.signal.value()?;
        Some(MacdIndicator {
            macd,
            signal,
            histogram: macd - signal,
        })
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

/// Calculate MACD as of the last bar.
pub fn calculate_macd(
    bars: &[Bar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    let mut macd = Macd::new(fast_period, slow_period, signal_period);
    bars.iter().fold(None, |_, bar| macd.update(bar.close))
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[Bar]) -> Option<MacdIndicator> {
    calculate_macd(bars, 12, 26, 9)
}
