//! Psychological Line.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// Share of up-closes among the last `period` bars, times 100.
pub struct PsychologicalLine {
    period: usize,
}

impl Default for PsychologicalLine {
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl PsychologicalLine {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

impl Oscillator for PsychologicalLine {
    fn id(&self) -> &str {
        "psy"
    }

    fn name(&self) -> &str {
        "Psychological Line"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let up_days = ((i + 1 - self.period)..=i)
                .filter(|&j| candles[j].close > candles[j - 1].close)
                .count();
            values[i] = up_days as f64 / self.period as f64 * 100.0;
        }

        align(candles, values)
    }
}
