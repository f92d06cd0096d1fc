//! Technical indicator implementations.

pub mod atr;
pub mod bollinger;
pub mod bop;
pub mod cci;
pub mod cmo;
pub mod demarker;
pub mod ema;
pub mod keltner;
pub mod macd;
pub mod mfi;
pub mod psychological;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod ultimate;
pub mod williams_r;
pub mod zscore;

#[cfg(test)]
pub(crate) mod test_util;

pub use atr::{ema_atr, true_ranges};
pub use bollinger::BollingerB;
pub use bop::BalanceOfPower;
pub use cci::Cci;
pub use cmo::Cmo;
pub use demarker::DeMarker;
pub use ema::ema;
pub use keltner::KeltnerB;
pub use macd::Macd;
pub use mfi::Mfi;
pub use psychological::PsychologicalLine;
pub use roc::Roc;
pub use rsi::Rsi;
pub use sma::{mean, sma, std_dev};
pub use stochastic::Stochastic;
pub use ultimate::Ultimate;
pub use williams_r::WilliamsR;
pub use zscore::ZScore;

use super::Oscillator;
use crate::types::Params;

/// Ids of every single-line oscillator that can be drawn as a pane.
pub const LINE_OSCILLATOR_IDS: &[&str] = &[
    "rsi", "wr", "cci", "cmo", "uo", "bbp", "roc", "bop", "dem", "psy", "zscore", "kbp", "stoch",
    "mfi",
];

/// Build the single-line oscillator registered under `id`.
///
/// Returns `None` for unknown ids and for `macd`, whose output has three lines.
pub fn line_oscillator(id: &str, params: &Params) -> Option<Box<dyn Oscillator>> {
    let oscillator: Box<dyn Oscillator> = match id {
        "rsi" => Box::new(Rsi::from_params(params)),
        "wr" => Box::new(WilliamsR::from_params(params)),
        "cci" => Box::new(Cci::from_params(params)),
        "cmo" => Box::new(Cmo::from_params(params)),
        "uo" => Box::new(Ultimate::from_params(params)),
        "bbp" => Box::new(BollingerB::from_params(params)),
        "roc" => Box::new(Roc::from_params(params)),
        "bop" => Box::new(BalanceOfPower),
        "dem" => Box::new(DeMarker::from_params(params)),
        "psy" => Box::new(PsychologicalLine::from_params(params)),
        "zscore" => Box::new(ZScore::from_params(params)),
        "kbp" => Box::new(KeltnerB::from_params(params)),
        "stoch" => Box::new(Stochastic::from_params(params)),
        "mfi" => Box::new(Mfi::from_params(params)),
        _ => return None,
    };
    Some(oscillator)
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::*;

    #[test]
    fn test_every_line_id_dispatches_to_itself() {
        for id in LINE_OSCILLATOR_IDS {
            let oscillator = line_oscillator(id, &Params::new())
                .unwrap_or_else(|| panic!("no oscillator for {}", id));
            assert_eq!(oscillator.id(), *id);
        }
    }

    #[test]
    fn test_unknown_and_macd_ids() {
        assert!(line_oscillator("ichimoku", &Params::new()).is_none());
        assert!(line_oscillator("macd", &Params::new()).is_none());
    }

    #[test]
    fn test_every_oscillator_is_aligned_and_warms_up() {
        let candles = choppy_candles(80);
        for id in LINE_OSCILLATOR_IDS {
            let oscillator = line_oscillator(id, &Params::new()).unwrap();
            let series = oscillator.calculate(&candles);
            assert_aligned(&candles, &series);
            let warmup = oscillator.warmup();
            assert!(
                series[..warmup].iter().all(|p| p.value.is_nan()),
                "{} defined before warm-up",
                id
            );
            assert!(
                series[warmup..].iter().all(|p| p.value.is_finite()),
                "{} undefined after warm-up",
                id
            );
        }
    }

    #[test]
    fn test_every_oscillator_handles_empty_input() {
        for id in LINE_OSCILLATOR_IDS {
            let oscillator = line_oscillator(id, &Params::new()).unwrap();
            assert!(oscillator.calculate(&[]).is_empty());
        }
    }
}
