//! DeMarker indicator.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// DeMarker, scaled 0-100.
///
/// DeMax = max(high - prev high, 0), DeMin = max(prev low - low, 0), summed
/// over the window: `DeMax / (DeMax + DeMin) * 100`. Reads 50 when both are 0.
pub struct DeMarker {
    period: usize,
}

impl Default for DeMarker {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl DeMarker {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

impl Oscillator for DeMarker {
    fn id(&self) -> &str {
        "dem"
    }

    fn name(&self) -> &str {
        "DeMarker"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let mut de_max = 0.0;
            let mut de_min = 0.0;
            for j in (i + 1 - self.period)..=i {
                de_max += (candles[j].high - candles[j - 1].high).max(0.0);
                de_min += (candles[j - 1].low - candles[j].low).max(0.0);
            }
            values[i] = if de_max + de_min == 0.0 {
                50.0
            } else {
                de_max / (de_max + de_min) * 100.0
            };
        }

        align(candles, values)
    }
}
