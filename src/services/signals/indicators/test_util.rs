use crate::types::{Candle, CandleTime};

pub fn candle(i: usize, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle {
        time: CandleTime::Unix(1_000_000 + i as i64 * 60_000),
        open,
        high,
        low,
        close,
        volume: 1000.0,
    }
}

pub fn flat_candles(count: usize, price: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| candle(i, price, price, price, price))
        .collect()
}

pub fn uptrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 1.5;
            candle(i, base, base + 2.0, base - 1.0, base + 1.0)
        })
        .collect()
}

pub fn downtrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 200.0 - i as f64 * 1.5;
            candle(i, base, base + 1.0, base - 2.0, base - 1.0)
        })
        .collect()
}

/// Deterministic zig-zag so both gains and losses occur.
pub fn choppy_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let wave = ((i % 7) as f64 - 3.0) * 1.7 + ((i % 3) as f64 - 1.0) * 0.9;
            let close = 100.0 + wave + i as f64 * 0.1;
            let open = close - 0.4 + (i % 2) as f64 * 0.8;
            candle(i, open, open.max(close) + 0.6, open.min(close) - 0.6, close)
        })
        .collect()
}

pub fn assert_aligned(candles: &[Candle], series: &[crate::types::IndicatorPoint]) {
    assert_eq!(candles.len(), series.len());
    for (c, p) in candles.iter().zip(series) {
        assert_eq!(c.time, p.time);
    }
}
