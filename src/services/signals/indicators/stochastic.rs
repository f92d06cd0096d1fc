//! Stochastic Oscillator indicator.

use super::williams_r::high_low;
use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// Stochastic %K.
///
/// %K = (Current Close - Lowest Low) / (Highest High - Lowest Low) * 100,
/// 50 for a flat window.
pub struct Stochastic {
    k_period: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self { k_period: 14 }
    }
}

impl Stochastic {
    pub fn new(k_period: usize) -> Self {
        Self {
            k_period: k_period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().k_period))
    }
}

impl Oscillator for Stochastic {
    fn id(&self) -> &str {
        "stoch"
    }

    fn name(&self) -> &str {
        "Stochastic %K"
    }

    fn warmup(&self) -> usize {
        self.k_period - 1
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let (highest_high, lowest_low) = high_low(&candles[(i + 1 - self.k_period)..=i]);
            values[i] = if highest_high != lowest_low {
                ((candles[i].close - lowest_low) / (highest_high - lowest_low)) * 100.0
            } else {
                50.0
            };
        }

        align(candles, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;

    #[test]
    fn test_stochastic_uptrend_high_k() {
        let series = Stochastic::default().calculate(&uptrend_candles(30));
        assert!(series.last().unwrap().value > 50.0);
    }

    #[test]
    fn test_stochastic_value_range() {
        let series = Stochastic::default().calculate(&choppy_candles(60));
        for p in series.iter().filter(|p| p.is_defined()) {
            assert!(p.value >= 0.0 && p.value <= 100.0);
        }
    }

    #[test]
    fn test_stochastic_flat_window() {
        let series = Stochastic::default().calculate(&flat_candles(20, 3.0));
        assert!(series[12].value.is_nan());
        assert!(series[13..].iter().all(|p| p.value == 50.0));
    }
}
