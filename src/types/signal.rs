use super::CandleTime;
use serde::{Deserialize, Serialize};

/// Discrete classifier output for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSignal {
    /// Buy.
    #[serde(rename = "AL")]
    Al,
    /// Sell.
    #[serde(rename = "SAT")]
    Sat,
}

impl TradeSignal {
    /// Resolve the two vote outcomes of a bar.
    ///
    /// Sell is evaluated after buy and wins when both fire. Historical
    /// COMBO/HUNTER markers depend on this ordering.
    pub fn resolve(buy: bool, sell: bool) -> Option<Self> {
        let mut signal = None;
        if buy {
            signal = Some(TradeSignal::Al);
        }
        if sell {
            signal = Some(TradeSignal::Sat);
        }
        signal
    }

    pub fn label(&self) -> &'static str {
        match self {
            TradeSignal::Al => "AL",
            TradeSignal::Sat => "SAT",
        }
    }
}

/// Oscillator readings a COMBO vote was based on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboDetails {
    pub rsi: f64,
    pub williams_r: f64,
    pub cci: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
}

/// COMBO classifier record for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboSignal {
    pub time: CandleTime,
    pub buy_score: u8,
    pub sell_score: u8,
    pub signal: Option<TradeSignal>,
    pub details: ComboDetails,
}

/// Oscillator readings a HUNTER vote was based on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunterDetails {
    pub rsi: f64,
    pub rsi_fast: f64,
    pub stoch: f64,
    pub williams_r: f64,
    pub cci: f64,
    pub cmo: f64,
    pub ultimate: f64,
    pub bollinger_b: f64,
    pub roc: f64,
    pub bop: f64,
    pub demarker: f64,
    pub psy: f64,
    pub zscore: f64,
    pub keltner_b: f64,
    pub mfi: f64,
}

/// HUNTER classifier record for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunterSignal {
    pub time: CandleTime,
    pub dip_score: u8,
    pub top_score: u8,
    pub signal: Option<TradeSignal>,
    pub details: HunterDetails,
}
