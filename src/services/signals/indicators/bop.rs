//! Balance of Power (BOP) indicator.

use crate::services::signals::Oscillator;
use crate::types::{align, Candle, IndicatorSeries};

/// `(close - open) / (high - low)` per bar, 0 for a zero-range bar.
#[derive(Default)]
pub struct BalanceOfPower;

impl Oscillator for BalanceOfPower {
    fn id(&self) -> &str {
        "bop"
    }

    fn name(&self) -> &str {
        "Balance of Power"
    }

    fn warmup(&self) -> usize {
        0
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let values = candles
            .iter()
            .map(|c| {
                let range = c.high - c.low;
                if range == 0.0 {
                    0.0
                } else {
                    (c.close - c.open) / range
                }
            })
            .collect();

        align(candles, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;

    #[test]
    fn test_bop_values() {
        let candles = vec![candle(0, 10.0, 12.0, 8.0, 11.0), candle(1, 5.0, 5.0, 5.0, 5.0)];
        let series = BalanceOfPower.calculate(&candles);
        assert_eq!(series[0].value, 0.25);
        assert_eq!(series[1].value, 0.0);
    }
}
