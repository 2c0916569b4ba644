//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::bar::Bar;

/// Streaming ATR with Wilder's smoothing.
///
/// True range starts at the second bar; the first ATR is the mean of the
/// first `period` true ranges.
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    prev_close: Option<f64>,
    seen: usize,
    seed_sum: f64,
    value: Option<f64>,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prev_close: None,
            seen: 0,
            seed_sum: 0.0,
            value: None,
        }
    }

    pub fn update(&mut self, high: f64, low: f64, close: f64) -> Option<f64> {
        if let Some(prev_close) = self.prev_close {
            let tr = math::true_range(high, low, prev_close);
            self.value = match self.value {
                Some(prev) => Some(math::wilder_from_previous(tr, prev, self.period)),
                None => {
                    self.seen += 1;
                    self.seed_sum += tr;
                    (self.seen == self.period).then(|| self.seed_sum / self.period as f64)
                }
            };
        }
        self.prev_close = Some(close);
        self.value
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Calculate ATR (Average True Range) as of the last bar.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Option<f64> {
    let mut atr = Atr::new(period);
    bars.iter().fold(None, |_, bar| atr.update(bar.high, bar.low, bar.close))
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(bars: &[Bar]) -> Option<f64> {
    calculate_atr(bars, 14)
}
