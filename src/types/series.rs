use super::{Candle, CandleTime};
use serde::{Deserialize, Serialize};

/// One point of an oscillator output.
///
/// `value` is NaN while the oscillator's lookback window is not yet filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: CandleTime,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn is_defined(&self) -> bool {
        self.value.is_finite()
    }
}

/// Output of a single-valued oscillator, index-aligned 1:1 with its input candles.
pub type IndicatorSeries = Vec<IndicatorPoint>;

/// Zip raw values onto the candle time axis.
///
/// `values` must have the same length as `candles`.
pub fn align(candles: &[Candle], values: Vec<f64>) -> IndicatorSeries {
    debug_assert_eq!(candles.len(), values.len());
    candles
        .iter()
        .zip(values)
        .map(|(c, value)| IndicatorPoint {
            time: c.time.clone(),
            value,
        })
        .collect()
}

/// Value at `index`, NaN when out of range.
pub fn value_at(series: &[IndicatorPoint], index: usize) -> f64 {
    series.get(index).map(|p| p.value).unwrap_or(f64::NAN)
}

/// Drop leading (and any other) undefined points, e.g. before sending a pane.
pub fn defined_points(series: IndicatorSeries) -> IndicatorSeries {
    series.into_iter().filter(IndicatorPoint::is_defined).collect()
}

/// MACD line, signal line and histogram on one shared time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

impl MacdSeries {
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}
