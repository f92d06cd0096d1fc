//! Z-Score of the close.

use super::{sma, std_dev};
use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, closes, Candle, IndicatorSeries, Params};

/// `(close - mean) / stddev` over the trailing window, 0 when stddev is 0.
pub struct ZScore {
    period: usize,
}

impl Default for ZScore {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl ZScore {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

impl Oscillator for ZScore {
    fn id(&self) -> &str {
        "zscore"
    }

    fn name(&self) -> &str {
        "Z-Score"
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let closes = closes(candles);
        let means = sma(&closes, self.period);
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let deviation = std_dev(&closes[(i + 1 - self.period)..=i], means[i]);
            values[i] = if deviation == 0.0 {
                0.0
            } else {
                (closes[i] - means[i]) / deviation
            };
        }

        align(candles, values)
    }
}
