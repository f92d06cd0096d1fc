//! Chande Momentum Oscillator (CMO).

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// CMO over the last `period` close deltas:
/// `(sum up - sum down) / (sum up + sum down) * 100`, 0 when both sums are 0.
pub struct Cmo {
    period: usize,
}

impl Default for Cmo {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Cmo {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

impl Oscillator for Cmo {
    fn id(&self) -> &str {
        "cmo"
    }

    fn name(&self) -> &str {
        "CMO"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let mut up = 0.0;
            let mut down = 0.0;
            for j in (i + 1 - self.period)..=i {
                let change = candles[j].close - candles[j - 1].close;
                if change > 0.0 {
                    up += change;
                } else {
                    down -= change;
                }
            }
            values[i] = if up + down == 0.0 {
                0.0
            } else {
                (up - down) / (up + down) * 100.0
            };
        }

        align(candles, values)
    }
}
