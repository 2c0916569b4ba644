//! Combined indicator state over a bar series.

use crate::indicators::momentum::{Macd, Rsi, DEFAULT_RSI_PERIOD};
use crate::indicators::trend::{Ema, Sma};
use crate::indicators::volatility::{Atr, BollingerBands};
use crate::indicators::volume::{Obv, VolumeAverage};
use crate::models::bar::Bar;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::MarketStats;

/// Feeds bars one at a time through every indicator and snapshots the most
/// recent values.
///
/// A snapshot after pushing `bars[0..=i]` is identical to
/// [`IndicatorEngine::compute`] over that same prefix, which lets the
/// backtester walk a series in a single pass.
///
/// Bars must arrive in strictly increasing timestamp order. Out-of-order
/// input is a caller bug; it is only caught by a debug assertion.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    obv: Obv,
    sma_20: Sma,
    sma_50: Sma,
    ema_20: Ema,
    atr: Atr,
    volume_average: VolumeAverage,
    last_bar: Option<Bar>,
    prev_close: Option<f64>,
    bars_seen: usize,
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self {
            rsi: Rsi::new(DEFAULT_RSI_PERIOD),
            macd: Macd::default(),
            bollinger: BollingerBands::default(),
            obv: Obv::new(),
            sma_20: Sma::new(20),
            sma_50: Sma::new(50),
            ema_20: Ema::new(20),
            atr: Atr::new(14),
            volume_average: VolumeAverage::default(),
            last_bar: None,
            prev_close: None,
            bars_seen: 0,
        }
    }

    pub fn push(&mut self, bar: &Bar) {
        debug_assert!(
            self.last_bar
                .map_or(true, |last| last.timestamp < bar.timestamp),
            "bars must be strictly increasing by timestamp"
        );

        self.rsi.update(bar.close);
        self.macd.update(bar.close);
        self.bollinger.update(bar.close);
        self.obv.update(bar.close, bar.volume);
        self.sma_20.update(bar.close);
        self.sma_50.update(bar.close);
        self.ema_20.update(bar.close);
        self.atr.update(bar.high, bar.low, bar.close);
        self.volume_average.update(bar.volume);

        self.prev_close = self.last_bar.map(|last| last.close);
        self.last_bar = Some(*bar);
        self.bars_seen += 1;
    }

    pub fn bars_seen(&self) -> usize {
        self.bars_seen
    }

    pub fn snapshot(&self) -> IndicatorSet {
        IndicatorSet {
            rsi: self.rsi.value(),
            macd: self.macd.value(),
            bb: self.bollinger.value(),
            obv: self.obv.value(),
            sma_20: self.sma_20.value(),
            sma_50: self.sma_50.value(),
            ema_20: self.ema_20.value(),
            atr: self.atr.value(),
        }
    }

    /// Statistics for the latest bar; `None` before any bar was pushed.
    pub fn stats(&self) -> Option<MarketStats> {
        let last = self.last_bar?;
        let daily_return = self
            .prev_close
            .filter(|prev| *prev != 0.0)
            .map(|prev| (last.close / prev - 1.0) * 100.0);

        Some(MarketStats {
            current_price: last.close,
            daily_return,
            volume: last.volume,
            avg_volume_10d: self.volume_average.value()?,
        })
    }

    /// Indicator values as of the last bar of `bars`.
    pub fn compute(bars: &[Bar]) -> IndicatorSet {
        Self::replay(bars).snapshot()
    }

    /// Market statistics as of the last bar of `bars`.
    pub fn market_stats(bars: &[Bar]) -> Option<MarketStats> {
        Self::replay(bars).stats()
    }

    pub fn replay(bars: &[Bar]) -> Self {
        let mut engine = Self::new();
        for bar in bars {
            engine.push(bar);
        }
        engine
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
