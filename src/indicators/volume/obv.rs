//! OBV (On-Balance Volume) indicator

use crate::models::bar::Bar;

/// Running OBV. Starts at the first bar's volume, then adds volume on up
/// closes and subtracts it on down closes.
///
/// The value depends on where the series starts, so point-in-time OBV
/// needs the full history up to that point.
#[derive(Debug, Clone, Default)]
pub struct Obv {
    prev_close: Option<f64>,
    value: Option<f64>,
}

impl Obv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, close: f64, volume: f64) -> Option<f64> {
        let next = match (self.prev_close, self.value) {
            (Some(prev), Some(obv)) if close > prev => obv + volume,
            (Some(prev), Some(obv)) if close < prev => obv - volume,
            (Some(_), Some(obv)) => obv,
            _ => volume,
        };
        self.prev_close = Some(close);
        self.value = Some(next);
        self.value
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Calculate OBV over the whole window.
pub fn calculate_obv(bars: &[Bar]) -> Option<f64> {
    let mut obv = Obv::new();
    bars.iter().fold(None, |_, bar| obv.update(bar.close, bar.volume))
}
