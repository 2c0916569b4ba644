//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::bar::Bar;

/// Streaming EMA seeded with the SMA of the first `period` values.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    seen: usize,
    seed_sum: f64,
    value: Option<f64>,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            seen: 0,
            seed_sum: 0.0,
            value: None,
        }
    }

    pub fn update(&mut self, value: f64) -> Option<f64> {
        self.value = match self.value {
            Some(prev) => Some(math::ema_from_previous(value, prev, self.period)),
            None => {
                self.seen += 1;
                self.seed_sum += value;
                (self.seen == self.period).then(|| self.seed_sum / self.period as f64)
            }
        };
        self.value
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

/// Calculate the EMA of closes as of the last bar.
pub fn calculate_ema(bars: &[Bar], period: usize) -> Option<f64> {
    let mut ema = Ema::new(period);
    bars.iter().fold(None, |_, bar| ema.update(bar.close))
}
