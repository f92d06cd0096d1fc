use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering key of a candle as delivered by the market-data API.
///
/// BIST endpoints send ISO date strings, crypto endpoints send unix
/// timestamps. The engine never interprets the value, it only copies it
/// onto every output point so callers can align by time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandleTime {
    Unix(i64),
    Text(String),
}

impl fmt::Display for CandleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandleTime::Unix(ts) => write!(f, "{}", ts),
            CandleTime::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CandleTime {
    fn from(ts: i64) -> Self {
        CandleTime::Unix(ts)
    }
}

impl From<&str> for CandleTime {
    fn from(s: &str) -> Self {
        CandleTime::Text(s.to_string())
    }
}

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: CandleTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    /// Typical price `(high + low + close) / 3`.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// True range against the previous close, or `high - low` for the first bar.
    pub fn true_range(&self, prev: Option<&Candle>) -> f64 {
        let hl = self.high - self.low;
        match prev {
            Some(prev) => {
                let hc = (self.high - prev.close).abs();
                let lc = (self.low - prev.close).abs();
                hl.max(hc).max(lc)
            }
            None => hl,
        }
    }
}

/// Extract closing prices.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
