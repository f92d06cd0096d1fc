//! HUNTER composite classifier: fifteen-oscillator dip/top voting.

use super::indicators::{
    BalanceOfPower, BollingerB, Cci, Cmo, DeMarker, KeltnerB, Mfi, PsychologicalLine, Roc, Rsi,
    Stochastic, Ultimate, WilliamsR, ZScore,
};
use super::{float_param, score_param, Oscillator};
use crate::types::{
    value_at, Candle, HunterDetails, HunterSignal, IndicatorSeries, Params, TradeSignal,
};

/// Fewer candles than this yields no HUNTER rows at all.
pub const HUNTER_MIN_BARS: usize = 30;

/// Number of oscillators voting on each side.
pub const HUNTER_CONDITIONS: u8 = 15;

/// Oversold (`dip`) and overbought (`top`) thresholds of one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub dip: f64,
    pub top: f64,
}

impl Band {
    const fn new(dip: f64, top: f64) -> Self {
        Self { dip, top }
    }

    fn is_dip(&self, value: f64) -> bool {
        !value.is_nan() && value <= self.dip
    }

    fn is_top(&self, value: f64) -> bool {
        !value.is_nan() && value >= self.top
    }
}

/// Parameter-key prefixes of the HUNTER inputs, in voting order.
///
/// Thresholds are overridable as `<key>Dip` / `<key>Top`, e.g. `rsiDip`.
pub const HUNTER_INPUTS: [&str; 15] = [
    "rsi", "rsiFast", "stoch", "wr", "cci", "cmo", "uo", "bbp", "roc", "bop", "dem", "psy",
    "zscore", "kbp", "mfi",
];

const DEFAULT_BANDS: [Band; 15] = [
    Band::new(30.0, 70.0),
    Band::new(20.0, 80.0),
    Band::new(20.0, 80.0),
    Band::new(-80.0, -20.0),
    Band::new(-100.0, 100.0),
    Band::new(-50.0, 50.0),
    Band::new(30.0, 70.0),
    Band::new(0.0, 100.0),
    Band::new(-3.0, 3.0),
    Band::new(-0.5, 0.5),
    Band::new(30.0, 70.0),
    Band::new(25.0, 75.0),
    Band::new(-2.0, 2.0),
    Band::new(0.0, 100.0),
    Band::new(20.0, 80.0),
];

const FAST_RSI_PERIOD: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct HunterParams {
    pub bands: [Band; 15],
    pub required_dip_score: u8,
    pub required_top_score: u8,
}

impl Default for HunterParams {
    fn default() -> Self {
        Self {
            bands: DEFAULT_BANDS,
            required_dip_score: 3,
            required_top_score: 4,
        }
    }
}

impl HunterParams {
    pub fn from_params(params: &Params) -> Self {
        let d = Self::default();
        let mut bands = d.bands;
        for (band, key) in bands.iter_mut().zip(HUNTER_INPUTS) {
            band.dip = float_param(params, &format!("{}Dip", key), band.dip);
            band.top = float_param(params, &format!("{}Top", key), band.top);
        }
        Self {
            bands,
            required_dip_score: score_param(params, "requiredDipScore", d.required_dip_score),
            required_top_score: score_param(params, "requiredTopScore", d.required_top_score),
        }
    }
}

/// HUNTER classifier.
#[derive(Debug, Clone, Default)]
pub struct Hunter {
    params: HunterParams,
}

impl Hunter {
    pub fn new(params: HunterParams) -> Self {
        Self { params }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(HunterParams::from_params(params))
    }

    pub fn params(&self) -> &HunterParams {
        &self.params
    }

    /// Input series in [`HUNTER_INPUTS`] order.
    fn input_series(candles: &[Candle]) -> [IndicatorSeries; 15] {
        [
            Rsi::default().calculate(candles),
            Rsi::new(FAST_RSI_PERIOD).calculate(candles),
            Stochastic::default().calculate(candles),
            WilliamsR::default().calculate(candles),
            Cci::default().calculate(candles),
            Cmo::default().calculate(candles),
            Ultimate::default().calculate(candles),
            BollingerB::default().calculate(candles),
            Roc::default().calculate(candles),
            BalanceOfPower.calculate(candles),
            DeMarker::default().calculate(candles),
            PsychologicalLine::default().calculate(candles),
            ZScore::default().calculate(candles),
            KeltnerB::default().calculate(candles),
            Mfi::default().calculate(candles),
        ]
    }

    /// One row per candle, or no rows when history is shorter than
    /// [`HUNTER_MIN_BARS`].
    pub fn calculate(&self, candles: &[Candle]) -> Vec<HunterSignal> {
        if candles.len() < HUNTER_MIN_BARS {
            return Vec::new();
        }

        let inputs = Self::input_series(candles);
        let p = &self.params;

        candles
            .iter()
            .enumerate()
            .map(|(i, candle)| {
                let values: [f64; 15] = std::array::from_fn(|k| value_at(&inputs[k], i));

                let dip_score = values
                    .iter()
                    .zip(&p.bands)
                    .filter(|(v, band)| band.is_dip(**v))
                    .count() as u8;
                let top_score = values
                    .iter()
                    .zip(&p.bands)
                    .filter(|(v, band)| band.is_top(**v))
                    .count() as u8;

                HunterSignal {
                    time: candle.time.clone(),
                    dip_score,
                    top_score,
                    signal: TradeSignal::resolve(
                        dip_score >= p.required_dip_score,
                        top_score >= p.required_top_score,
                    ),
                    details: details(&values),
                }
            })
            .collect()
    }
}

fn details(v: &[f64; 15]) -> HunterDetails {
    HunterDetails {
        rsi: v[0],
        rsi_fast: v[1],
        stoch: v[2],
        williams_r: v[3],
        cci: v[4],
        cmo: v[5],
        ultimate: v[6],
        bollinger_b: v[7],
        roc: v[8],
        bop: v[9],
        demarker: v[10],
        psy: v[11],
        zscore: v[12],
        keltner_b: v[13],
        mfi: v[14],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;

    #[test]
    fn test_hunter_short_history_is_empty() {
        assert!(Hunter::default().calculate(&choppy_candles(29)).is_empty());
        assert_eq!(Hunter::default().calculate(&choppy_candles(30)).len(), 30);
    }

    #[test]
    fn test_hunter_scores_bounded() {
        for row in Hunter::default().calculate(&choppy_candles(150)) {
            assert!(row.dip_score <= HUNTER_CONDITIONS);
            assert!(row.top_score <= HUNTER_CONDITIONS);
        }
    }

    #[test]
    fn test_hunter_nan_never_counts() {
        // Every input except balance of power is still warming up on bar 0.
        let rows = Hunter::default().calculate(&downtrend_candles(40));
        assert!(rows[0].details.rsi.is_nan());
        assert!(rows[0].dip_score <= 1);
        assert!(rows[0].top_score <= 1);
    }

    #[test]
    fn test_hunter_downtrend_dips() {
        let rows = Hunter::default().calculate(&downtrend_candles(60));
        let last = rows.last().unwrap();
        assert!(last.dip_score >= 3);
        assert_eq!(last.top_score, 0);
        assert_eq!(last.signal, Some(TradeSignal::Al));
    }

    #[test]
    fn test_hunter_uptrend_tops() {
        let rows = Hunter::default().calculate(&uptrend_candles(60));
        let last = rows.last().unwrap();
        assert!(last.top_score >= 4);
        assert_eq!(last.signal, Some(TradeSignal::Sat));
    }

    #[test]
    fn test_hunter_sell_overrides_buy() {
        let mut params = HunterParams::default();
        for band in params.bands.iter_mut() {
            band.dip = f64::INFINITY;
            band.top = f64::NEG_INFINITY;
        }
        let rows = Hunter::new(params).calculate(&choppy_candles(60));
        let last = rows.last().unwrap();
        assert_eq!(last.dip_score, HUNTER_CONDITIONS);
        assert_eq!(last.top_score, HUNTER_CONDITIONS);
        assert_eq!(last.signal, Some(TradeSignal::Sat));
    }

    #[test]
    fn test_hunter_band_overrides() {
        let params: Params = [
            ("rsiDip".to_string(), 35.0),
            ("requiredTopScore".to_string(), 6.0),
        ]
        .into_iter()
        .collect();
        let hunter = Hunter::from_params(&params);
        assert_eq!(hunter.params().bands[0].dip, 35.0);
        assert_eq!(hunter.params().bands[0].top, 70.0);
        assert_eq!(hunter.params().required_top_score, 6);
        assert_eq!(hunter.params().required_dip_score, 3);
    }
}
