//! Rate of Change (ROC) indicator.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// Percent change of the close versus `period` bars ago.
/// A zero reference close reads 0.
pub struct Roc {
    period: usize,
}

impl Default for Roc {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Roc {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

impl Oscillator for Roc {
    fn id(&self) -> &str {
        "roc"
    }

    fn name(&self) -> &str {
        "ROC"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let reference = candles[i - self.period].close;
            values[i] = if reference == 0.0 {
                0.0
            } else {
                (candles[i].close - reference) / reference * 100.0
            };
        }

        align(candles, values)
    }
}
