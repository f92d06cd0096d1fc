//! Average True Range (ATR), EMA-smoothed.

use super::ema;
use crate::types::Candle;

/// True range per bar. The first bar uses `high - low`.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| c.true_range(i.checked_sub(1).map(|p| &candles[p])))
        .collect()
}

/// ATR as the legacy-seeded EMA of the true range.
pub fn ema_atr(candles: &[Candle], period: usize) -> Vec<f64> {
    ema(&true_ranges(candles), period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;

    #[test]
    fn test_true_range_uses_previous_close() {
        let candles = vec![
            candle(0, 10.0, 11.0, 9.0, 10.0),
            candle(1, 14.0, 15.0, 13.0, 14.0),
        ];
        let tr = true_ranges(&candles);
        assert_eq!(tr[0], 2.0);
        // gap up: high - prev close
        assert_eq!(tr[1], 5.0);
    }

    #[test]
    fn test_ema_atr_flat_is_zero() {
        let atr = ema_atr(&flat_candles(10, 5.0), 5);
        assert!(atr.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_ema_atr_positive() {
        let atr = ema_atr(&uptrend_candles(30), 14);
        assert!(atr.last().unwrap() > &0.0);
    }
}
