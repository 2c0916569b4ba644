//! Trailing average volume

use crate::models::bar::Bar;
use std::collections::VecDeque;

pub const DEFAULT_VOLUME_WINDOW: usize = 10;

/// Mean of the last `window` volumes, or of all volumes seen while fewer
/// than `window` bars have arrived.
#[derive(Debug, Clone)]
pub struct VolumeAverage {
    window: usize,
    volumes: VecDeque<f64>,
}

impl VolumeAverage {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            volumes: VecDeque::with_capacity(window + 1),
        }
    }

    pub fn update(&mut self, volume: f64) -> f64 {
        self.volumes.push_back(volume);
        if self.volumes.len() > self.window {
            self.volumes.pop_front();
        }
        self.volumes.iter().sum::<f64>() / self.volumes.len() as f64
    }

    pub fn value(&self) -> Option<f64> {
        if self.volumes.is_empty() {
            return None;
        }
        Some(self.volumes.iter().sum::<f64>() / self.volumes.len() as f64)
    }
}

impl Default for VolumeAverage {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME_WINDOW)
    }
}

/// Average volume over the trailing window of the given bars.
pub fn calculate_average_volume(bars: &[Bar], window: usize) -> Option<f64> {
    let mut average = VolumeAverage::new(window);
    bars.iter().fold(None, |_, bar| Some(average.update(bar.volume)))
}
