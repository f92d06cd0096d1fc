//! Technical indicator and composite signal engine.
//!
//! Oscillators map a candle series to an index-aligned output series.
//! The COMBO and HUNTER classifiers vote over several oscillators per bar.

pub mod combo;
pub mod hunter;
pub mod indicators;

pub use combo::{Combo, ComboParams};
pub use hunter::{Hunter, HunterParams};

use crate::types::{Candle, IndicatorSeries, Params};

/// A single-line oscillator.
pub trait Oscillator: Send + Sync {
    /// Registry id, also the pane key in compute responses.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Index of the first defined value given clean input.
    fn warmup(&self) -> usize;

    /// Compute the full series. Output length always equals `candles.len()`.
    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries;
}

/// Read a window-length parameter, rounded and clamped to at least 1.
pub fn period_param(params: &Params, key: &str, default: usize) -> usize {
    params
        .get(key)
        .copied()
        .filter(|v| v.is_finite())
        .map(|v| v.round().max(1.0) as usize)
        .unwrap_or(default)
}

/// Read a real-valued parameter.
pub fn float_param(params: &Params, key: &str, default: f64) -> f64 {
    params
        .get(key)
        .copied()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Read a vote-count parameter.
pub fn score_param(params: &Params, key: &str, default: u8) -> u8 {
    params
        .get(key)
        .copied()
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, u8::MAX as f64) as u8)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, f64)]) -> Params {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_period_param_default_when_missing() {
        assert_eq!(period_param(&Params::new(), "period", 14), 14);
    }

    #[test]
    fn test_period_param_rounds_and_clamps() {
        assert_eq!(period_param(&params(&[("period", 9.6)]), "period", 14), 10);
        assert_eq!(period_param(&params(&[("period", 0.0)]), "period", 14), 1);
        assert_eq!(period_param(&params(&[("period", -5.0)]), "period", 14), 1);
    }

    #[test]
    fn test_non_finite_params_fall_back() {
        let p = params(&[("period", f64::NAN), ("mult", f64::INFINITY)]);
        assert_eq!(period_param(&p, "period", 20), 20);
        assert_eq!(float_param(&p, "mult", 2.0), 2.0);
    }

    #[test]
    fn test_score_param() {
        assert_eq!(score_param(&params(&[("minBuyScore", 3.0)]), "minBuyScore", 2), 3);
        assert_eq!(score_param(&Params::new(), "minBuyScore", 2), 2);
    }
}
