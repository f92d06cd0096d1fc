//! Ultimate Oscillator.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// Ultimate Oscillator, blending three buying-pressure / true-range ratios
/// with 4:2:1 weights.
///
/// BP = close - min(low, prev close), TR = max(high, prev close) - min(low, prev close).
/// A window whose true-range sum is 0 contributes a ratio of 0.5.
pub struct Ultimate {
    short: usize,
    medium: usize,
    long: usize,
}

impl Default for Ultimate {
    fn default() -> Self {
        Self {
            short: 7,
            medium: 14,
            long: 28,
        }
    }
}

impl Ultimate {
    pub fn new(short: usize, medium: usize, long: usize) -> Self {
        Self {
            short: short.max(1),
            medium: medium.max(1),
            long: long.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        let defaults = Self::default();
        Self::new(
            period_param(params, "p1", defaults.short),
            period_param(params, "p2", defaults.medium),
            period_param(params, "p3", defaults.long),
        )
    }

    fn ratio(bp: &[f64], tr: &[f64], end: usize, period: usize) -> f64 {
        let start = end + 1 - period;
        let tr_sum: f64 = tr[start..=end].iter().sum();
        if tr_sum == 0.0 {
            return 0.5;
        }
        bp[start..=end].iter().sum::<f64>() / tr_sum
    }
}

impl Oscillator for Ultimate {
    fn id(&self) -> &str {
        "uo"
    }

    fn name(&self) -> &str {
        "Ultimate Oscillator"
    }

    fn warmup(&self) -> usize {
        self.short.max(self.medium).max(self.long)
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];
        if candles.len() <= self.warmup() {
            return align(candles, values);
        }

        // Index 0 has no previous close and never enters a window.
        let mut bp = vec![0.0; candles.len()];
        let mut tr = vec![0.0; candles.len()];
        for i in 1..candles.len() {
            let prev_close = candles[i - 1].close;
            let true_low = candles[i].low.min(prev_close);
            let true_high = candles[i].high.max(prev_close);
            bp[i] = candles[i].close - true_low;
            tr[i] = true_high - true_low;
        }

        for i in self.warmup()..candles.len() {
            let a = Self::ratio(&bp, &tr, i, self.short);
            let b = Self::ratio(&bp, &tr, i, self.medium);
            let c = Self::ratio(&bp, &tr, i, self.long);
            values[i] = (4.0 * a + 2.0 * b + c) / 7.0 * 100.0;
        }

        align(candles, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;

    #[test]
    fn test_uo_needs_long_window() {
        let series = Ultimate::default().calculate(&choppy_candles(40));
        assert!(series[27].value.is_nan());
        assert!(series[28].value.is_finite());
    }

    #[test]
    fn test_uo_flat_is_fifty() {
        let series = Ultimate::default().calculate(&flat_candles(35, 7.0));
        assert!(series[28..].iter().all(|p| p.value == 50.0));
    }

    #[test]
    fn test_uo_range() {
        let series = Ultimate::default().calculate(&choppy_candles(80));
        for p in series.iter().filter(|p| p.is_defined()) {
            assert!(p.value >= 0.0 && p.value <= 100.0);
        }
    }
}
