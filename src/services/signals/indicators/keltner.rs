//! Keltner %B indicator.

use super::{ema, ema_atr};
use crate::services::signals::{float_param, period_param, Oscillator};
use crate::types::{align, closes, Candle, IndicatorSeries, Params};

/// Keltner %B.
///
/// Position of the close inside `EMA(close) ± mult * ATR`, scaled to 0-100,
/// where ATR is the EMA of the true range. A zero-width channel reads 50.
pub struct KeltnerB {
    period: usize,
    multiplier: f64,
}

impl Default for KeltnerB {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl KeltnerB {
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self {
            period: period.max(1),
            multiplier,
        }
    }

    pub fn from_params(params: &Params) -> Self {
        let defaults = Self::default();
        Self::new(
            period_param(params, "period", defaults.period),
            float_param(params, "mult", defaults.multiplier),
        )
    }
}

impl Oscillator for KeltnerB {
    fn id(&self) -> &str {
        "kbp"
    }

    fn name(&self) -> &str {
        "Keltner %B"
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let closes = closes(candles);
        let middle = ema(&closes, self.period);
        let atr = ema_atr(candles, self.period);
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let upper = middle[i] + self.multiplier * atr[i];
            let lower = middle[i] - self.multiplier * atr[i];
            let width = upper - lower;

            values[i] = if width == 0.0 {
                50.0
            } else {
                (closes[i] - lower) / width * 100.0
            };
        }

        align(candles, values)
    }
}
