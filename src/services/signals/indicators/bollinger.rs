//! Bollinger %B indicator.

use super::{sma, std_dev};
use crate::services::signals::{float_param, period_param, Oscillator};
use crate::types::{align, closes, Candle, IndicatorSeries, Params};

/// Bollinger %B.
///
/// Position of the close inside `SMA ± mult * StdDev`, scaled to 0-100:
/// - 0: at the lower band, 100: at the upper band, 50: at the middle
/// - values outside 0-100 mean the close left the band
///
/// A zero-width band reads 50.
pub struct BollingerB {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerB {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerB {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period: period.max(1),
            std_dev_multiplier,
        }
    }

    pub fn from_params(params: &Params) -> Self {
        let defaults = Self::default();
        Self::new(
            period_param(params, "period", defaults.period),
            float_param(params, "mult", defaults.std_dev_multiplier),
        )
    }
}

impl Oscillator for BollingerB {
    fn id(&self) -> &str {
        "bbp"
    }

    fn name(&self) -> &str {
        "Bollinger %B"
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let closes = closes(candles);
        let middle = sma(&closes, self.period);
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let window = &closes[(i + 1 - self.period)..=i];
            let deviation = std_dev(window, middle[i]);
            let upper = middle[i] + self.std_dev_multiplier * deviation;
            let lower = middle[i] - self.std_dev_multiplier * deviation;
            let band_width = upper - lower;

            values[i] = if band_width == 0.0 {
                50.0
            } else {
                (closes[i] - lower) / band_width * 100.0
            };
        }

        align(candles, values)
    }
}
