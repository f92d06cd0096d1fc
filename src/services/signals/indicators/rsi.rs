//! Relative Strength Index (RSI) indicator.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, closes, Candle, IndicatorSeries, Params};

/// RSI (Relative Strength Index), Wilder smoothing.
///
/// The first `period` bars are NaN. The first value averages the first
/// `period` close deltas, later values smooth with
/// `avg = (avg * (period - 1) + new) / period`.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }

    /// RSI from averaged gain and loss, with the flat-window fallbacks.
    fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_gain == 0.0 && avg_loss == 0.0 {
            50.0
        } else if avg_loss == 0.0 {
            100.0
        } else if avg_gain == 0.0 {
            0.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        }
    }

    /// Calculate RSI over raw closes.
    ///
    /// The seed averages `period` deltas, so the first value sits at index
    /// `period`, not `period - 1`.
    pub fn calculate_values(closes: &[f64], period: usize) -> Vec<f64> {
        let period = period.max(1);
        let mut out = vec![f64::NAN; closes.len()];
        if closes.len() <= period {
            return out;
        }

        let split = |i: usize| {
            let change = closes[i] - closes[i - 1];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            }
        };

        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for i in 1..=period {
            let (gain, loss) = split(i);
            avg_gain += gain;
            avg_loss += loss;
        }
        avg_gain /= period as f64;
        avg_loss /= period as f64;
        out[period] = Self::rsi_value(avg_gain, avg_loss);

        for i in (period + 1)..closes.len() {
            let (gain, loss) = split(i);
            avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
            out[i] = Self::rsi_value(avg_gain, avg_loss);
        }

        out
    }
}

impl Oscillator for Rsi {
    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        align(
            candles,
            Self::calculate_values(&closes(candles), self.period),
        )
    }
}
