//! SMA (Simple Moving Average) indicator

use crate::models::bar::Bar;
use std::collections::VecDeque;

/// Rolling SMA over the trailing `period` values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    window: VecDeque<f64>,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            window: VecDeque::with_capacity(period + 1),
        }
    }

    pub fn update(&mut self, value: f64) -> Option<f64> {
        self.window.push_back(value);
        if self.window.len() > self.period {
            self.window.pop_front();
        }
        self.value()
    }

    pub fn value(&self) -> Option<f64> {
        if self.period == 0 || self.window.len() < self.period {
            return None;
        }
        Some(self.window.iter().sum::<f64>() / self.period as f64)
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

/// Calculate the SMA of closes as of the last bar.
pub fn calculate_sma(bars: &[Bar], period: usize) -> Option<f64> {
    let mut sma = Sma::new(period);
    bars.iter().fold(None, |_, bar| sma.update(bar.close))
}
