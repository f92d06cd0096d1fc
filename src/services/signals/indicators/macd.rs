//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema;
use crate::services::signals::period_param;
use crate::types::{align, closes, Candle, MacdSeries, Params};

/// MACD indicator.
///
/// - MACD line = EMA(fast) - EMA(slow), undefined until the slow EMA has
///   seen a full window
/// - Signal line = EMA(signal) of the defined MACD values, placed back on
///   their original indices
/// - Histogram = MACD - signal
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period: fast_period.max(1),
            slow_period: slow_period.max(1),
            signal_period: signal_period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        let defaults = Self::default();
        Self::new(
            period_param(params, "fast", defaults.fast_period),
            period_param(params, "slow", defaults.slow_period),
            period_param(params, "signal", defaults.signal_period),
        )
    }

    pub fn id(&self) -> &str {
        "macd"
    }

    /// Index of the first defined MACD line value.
    pub fn warmup(&self) -> usize {
        self.fast_period.max(self.slow_period) - 1
    }

    pub fn calculate(&self, candles: &[Candle]) -> MacdSeries {
        let closes = closes(candles);
        let fast = ema(&closes, self.fast_period);
        let slow = ema(&closes, self.slow_period);
        let warmup = self.warmup();

        let macd: Vec<f64> = fast
            .iter()
            .zip(&slow)
            .enumerate()
            .map(|(i, (f, s))| if i < warmup { f64::NAN } else { f - s })
            .collect();

        // Signal EMA runs over the defined MACD values only.
        let defined: Vec<(usize, f64)> = macd
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .collect();
        let compact: Vec<f64> = defined.iter().map(|(_, v)| *v).collect();
        let compact_signal = ema(&compact, self.signal_period);

        let mut signal = vec![f64::NAN; macd.len()];
        for ((index, _), value) in defined.iter().zip(compact_signal) {
            signal[*index] = value;
        }

        let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

        MacdSeries {
            macd: align(candles, macd),
            signal: align(candles, signal),
            histogram: align(candles, histogram),
        }
    }
}
