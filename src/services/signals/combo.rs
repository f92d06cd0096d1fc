//! COMBO composite classifier: four-oscillator buy/sell voting.

use super::indicators::{Cci, Macd, Rsi, WilliamsR};
use super::{float_param, period_param, score_param, Oscillator};
use crate::types::{value_at, Candle, ComboDetails, ComboSignal, Params, TradeSignal};

/// Fewer candles than this yields no COMBO rows at all.
pub const COMBO_MIN_BARS: usize = 26;

/// Number of conditions voting on each side.
pub const COMBO_CONDITIONS: u8 = 4;

/// COMBO parameters. Buy and sell use separate, mirrored thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboParams {
    pub rsi_period: usize,
    pub wr_period: usize,
    pub cci_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub rsi_buy: f64,
    pub rsi_sell: f64,
    pub wr_buy: f64,
    pub wr_sell: f64,
    pub cci_buy: f64,
    pub cci_sell: f64,
    pub min_buy_score: u8,
    pub min_sell_score: u8,
}

impl Default for ComboParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            wr_period: 14,
            cci_period: 20,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            rsi_buy: 30.0,
            rsi_sell: 70.0,
            wr_buy: -80.0,
            wr_sell: -20.0,
            cci_buy: -100.0,
            cci_sell: 100.0,
            min_buy_score: 2,
            min_sell_score: 2,
        }
    }
}

impl ComboParams {
    pub fn from_params(params: &Params) -> Self {
        let d = Self::default();
        Self {
            rsi_period: period_param(params, "rsiPeriod", d.rsi_period),
            wr_period: period_param(params, "wrPeriod", d.wr_period),
            cci_period: period_param(params, "cciPeriod", d.cci_period),
            macd_fast: period_param(params, "macdFast", d.macd_fast),
            macd_slow: period_param(params, "macdSlow", d.macd_slow),
            macd_signal: period_param(params, "macdSignal", d.macd_signal),
            rsi_buy: float_param(params, "rsiBuy", d.rsi_buy),
            rsi_sell: float_param(params, "rsiSell", d.rsi_sell),
            wr_buy: float_param(params, "wrBuy", d.wr_buy),
            wr_sell: float_param(params, "wrSell", d.wr_sell),
            cci_buy: float_param(params, "cciBuy", d.cci_buy),
            cci_sell: float_param(params, "cciSell", d.cci_sell),
            min_buy_score: score_param(params, "minBuyScore", d.min_buy_score),
            min_sell_score: score_param(params, "minSellScore", d.min_sell_score),
        }
    }
}

/// True when `value` is defined and strictly below `threshold`.
pub(crate) fn below(value: f64, threshold: f64) -> bool {
    !value.is_nan() && value < threshold
}

/// True when `value` is defined and strictly above `threshold`.
pub(crate) fn above(value: f64, threshold: f64) -> bool {
    !value.is_nan() && value > threshold
}

/// COMBO classifier: MACD histogram, RSI, Williams %R and CCI vote per bar.
#[derive(Debug, Clone, Default)]
pub struct Combo {
    params: ComboParams,
}

impl Combo {
    pub fn new(params: ComboParams) -> Self {
        Self { params }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(ComboParams::from_params(params))
    }

    pub fn params(&self) -> &ComboParams {
        &self.params
    }

    /// One row per candle, or no rows when history is shorter than
    /// [`COMBO_MIN_BARS`].
    pub fn calculate(&self, candles: &[Candle]) -> Vec<ComboSignal> {
        if candles.len() < COMBO_MIN_BARS {
            return Vec::new();
        }

        let p = &self.params;
        let rsi = Rsi::new(p.rsi_period).calculate(candles);
        let wr = WilliamsR::new(p.wr_period).calculate(candles);
        let cci = Cci::new(p.cci_period).calculate(candles);
        let macd = Macd::new(p.macd_fast, p.macd_slow, p.macd_signal).calculate(candles);

        candles
            .iter()
            .enumerate()
            .map(|(i, candle)| {
                let details = ComboDetails {
                    rsi: value_at(&rsi, i),
                    williams_r: value_at(&wr, i),
                    cci: value_at(&cci, i),
                    macd: value_at(&macd.macd, i),
                    macd_signal: value_at(&macd.signal, i),
                    macd_histogram: value_at(&macd.histogram, i),
                };

                let buy_votes = [
                    above(details.macd_histogram, 0.0),
                    below(details.rsi, p.rsi_buy),
                    below(details.williams_r, p.wr_buy),
                    below(details.cci, p.cci_buy),
                ];
                let sell_votes = [
                    below(details.macd_histogram, 0.0),
                    above(details.rsi, p.rsi_sell),
                    above(details.williams_r, p.wr_sell),
                    above(details.cci, p.cci_sell),
                ];
                let buy_score = buy_votes.iter().filter(|v| **v).count() as u8;
                let sell_score = sell_votes.iter().filter(|v| **v).count() as u8;

                ComboSignal {
                    time: candle.time.clone(),
                    buy_score,
                    sell_score,
                    signal: TradeSignal::resolve(
                        buy_score >= p.min_buy_score,
                        sell_score >= p.min_sell_score,
                    ),
                    details,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;

    #[test]
    fn test_combo_short_history_is_empty() {
        assert!(Combo::default().calculate(&choppy_candles(25)).is_empty());
        assert_eq!(Combo::default().calculate(&choppy_candles(26)).len(), 26);
    }

    #[test]
    fn test_combo_scores_bounded() {
        for row in Combo::default().calculate(&choppy_candles(120)) {
            assert!(row.buy_score <= COMBO_CONDITIONS);
            assert!(row.sell_score <= COMBO_CONDITIONS);
        }
    }

    #[test]
    fn test_combo_downtrend_buys() {
        let rows = Combo::default().calculate(&downtrend_candles(60));
        let last = rows.last().unwrap();
        // RSI 0, W%R near -100, CCI well below -100
        assert!(last.buy_score >= 3);
        assert_eq!(last.signal, Some(TradeSignal::Al));
    }

    #[test]
    fn test_combo_uptrend_sells() {
        let rows = Combo::default().calculate(&uptrend_candles(60));
        let last = rows.last().unwrap();
        assert!(last.sell_score >= 3);
        assert_eq!(last.signal, Some(TradeSignal::Sat));
    }

    #[test]
    fn test_combo_flat_has_no_signal() {
        let rows = Combo::default().calculate(&flat_candles(40, 100.0));
        assert!(rows.iter().all(|r| r.signal.is_none()));
    }

    #[test]
    fn test_combo_sell_overrides_buy() {
        // Thresholds loose enough that both sides always fire once defined.
        let params = ComboParams {
            rsi_buy: 101.0,
            rsi_sell: -1.0,
            wr_buy: 1.0,
            wr_sell: -101.0,
            min_buy_score: 2,
            min_sell_score: 2,
            ..ComboParams::default()
        };
        let rows = Combo::new(params).calculate(&choppy_candles(60));
        let last = rows.last().unwrap();
        assert!(last.buy_score >= 2 && last.sell_score >= 2);
        assert_eq!(last.signal, Some(TradeSignal::Sat));
    }

    #[test]
    fn test_combo_from_params() {
        let params: Params = [("minBuyScore".to_string(), 3.0), ("rsiBuy".to_string(), 25.0)]
            .into_iter()
            .collect();
        let combo = Combo::from_params(&params);
        assert_eq!(combo.params().min_buy_score, 3);
        assert_eq!(combo.params().rsi_buy, 25.0);
        assert_eq!(combo.params().min_sell_score, 2);
    }
}
