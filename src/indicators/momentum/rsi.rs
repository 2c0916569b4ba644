//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::bar::Bar;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Streaming RSI using Wilder's smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The first averages are the plain mean of the first `period` changes, so a
/// value needs `period + 1` closes.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    prev_close: Option<f64>,
    changes: usize,
    gain_sum: f64,
    loss_sum: f64,
    averages: Option<(f64, f64)>,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prev_close: None,
            changes: 0,
            gain_sum: 0.0,
            loss_sum: 0.0,
            averages: None,
        }
    }

    pub fn update(&mut self, close: f64) -> Option<f64> {
        if let Some(prev) = self.prev_close {
            let change = close - prev;
            let gain = change.max(0.0);
            let loss = (-change).max(0.0);
            self.changes += 1;

            self.averages = match self.averages {
                Some((avg_gain, avg_loss)) => Some((
                    math::wilder_from_previous(gain, avg_gain, self.period),
                    math::wilder_from_previous(loss, avg_loss, self.period),
                )),
                None => {
                    self.gain_sum += gain;
                    self.loss_sum += loss;
                    (self.changes == self.period).then(|| {
                        (
                            self.gain_sum / self.period as f64,
                            self.loss_sum / self.period as f64,
                        )
                    })
                }
            };
        }
        self.prev_close = Some(close);
        self.value()
    }

    pub fn value(&self) -> Option<f64> {
        self.averages
            .map(|(avg_gain, avg_loss)| rsi_from_averages(avg_gain, avg_loss))
    }
}

/// A flat series has neither gains nor losses and reads as neutral (50).
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate the RSI as of the last bar.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Option<f64> {
    let mut rsi = Rsi::new(period);
    bars.iter().fold(None, |_, bar| rsi.update(bar.close))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[Bar]) -> Option<f64> {
    calculate_rsi(bars, DEFAULT_RSI_PERIOD)
}
