//! Commodity Channel Index (CCI) indicator.

use super::sma;
use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// CCI (Commodity Channel Index).
///
/// CCI = (TP - SMA(TP)) / (0.015 * Mean Deviation)
/// where TP = Typical Price = (High + Low + Close) / 3.
/// A window with zero mean deviation reads 0.
pub struct Cci {
    period: usize,
}

impl Default for Cci {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Cci {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }

    /// Calculate mean deviation.
    fn mean_deviation(values: &[f64], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().map(|v| (v - mean).abs()).sum::<f64>() / values.len() as f64
    }
}

impl Oscillator for Cci {
    fn id(&self) -> &str {
        "cci"
    }

    fn name(&self) -> &str {
        "CCI"
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();
        let means = sma(&typical, self.period);
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let window = &typical[(i + 1 - self.period)..=i];
            let mean_tp = means[i];
            let mad = Self::mean_deviation(window, mean_tp);
            values[i] = if mad == 0.0 {
                0.0
            } else {
                (typical[i] - mean_tp) / (0.015 * mad)
            };
        }

        align(candles, values)
    }
}
