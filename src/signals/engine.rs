//! One-shot analysis of a price series: indicators, statistics and signals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::IndicatorEngine;
use crate::models::bar::Bar;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::{MarketStats, SignalSet};
use crate::signals::SignalGenerator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data found for ticker {0}")]
    NoData(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ticker: String,
    /// Timestamp of the last bar analysed.
    pub timestamp: DateTime<Utc>,
    pub technical_indicators: IndicatorSet,
    pub statistics: MarketStats,
    pub signals: SignalSet,
}

pub struct SignalEngine {
    generator: SignalGenerator,
}

impl SignalEngine {
    pub fn new(generator: SignalGenerator) -> Self {
        Self { generator }
    }

    /// Analyse the latest state of `bars`.
    pub fn analyze(&self, ticker: &str, bars: &[Bar]) -> Result<AnalysisReport, AnalysisError> {
        let last = bars
            .last()
            .ok_or_else(|| AnalysisError::NoData(ticker.to_string()))?;

        let engine = IndicatorEngine::replay(bars);
        let statistics = engine
            .stats()
            .ok_or_else(|| AnalysisError::NoData(ticker.to_string()))?;
        let technical_indicators = engine.snapshot();
        let signals = self
            .generator
            .generate(&technical_indicators, &statistics.volume_stats());

        tracing::debug!(
            ticker = %ticker,
            bars = bars.len(),
            unavailable = ?technical_indicators.unavailable(),
            "analysed price series"
        );

        Ok(AnalysisReport {
            ticker: ticker.to_string(),
            timestamp: last.timestamp,
            technical_indicators,
            statistics,
            signals,
        })
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(SignalGenerator::default())
    }
}
