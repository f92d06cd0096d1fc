//! Williams %R indicator.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// Williams %R.
///
/// `((highest high - close) / (highest high - lowest low)) * -100` over the
/// trailing window. A flat window reads -50.
pub struct WilliamsR {
    period: usize,
}

impl Default for WilliamsR {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl WilliamsR {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

/// Highest high and lowest low of a window.
pub(crate) fn high_low(window: &[Candle]) -> (f64, f64) {
    let highest = window
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    (highest, lowest)
}

impl Oscillator for WilliamsR {
    fn id(&self) -> &str {
        "wr"
    }

    fn name(&self) -> &str {
        "Williams %R"
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let (highest, lowest) = high_low(&candles[(i + 1 - self.period)..=i]);
            values[i] = if highest == lowest {
                -50.0
            } else {
                ((highest - candles[i].close) / (highest - lowest)) * -100.0
            };
        }

        align(candles, values)
    }
}
