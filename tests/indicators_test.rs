//! Integration tests for the oscillator library

use kahin::services::signals::indicators::{
    ema, line_oscillator, Cci, Macd, Rsi, WilliamsR, LINE_OSCILLATOR_IDS,
};
use kahin::services::signals::Oscillator;
use kahin::types::{Candle, CandleTime, Params};

fn bar(i: usize, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle {
        time: CandleTime::Unix(1_700_000_000 + i as i64 * 3600),
        open,
        high,
        low,
        close,
        volume: 500.0 + (i % 5) as f64 * 100.0,
    }
}

fn flat(count: usize) -> Vec<Candle> {
    (0..count).map(|i| bar(i, 100.0, 100.0, 100.0, 100.0)).collect()
}

fn rising(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            bar(i, close - 0.5, close + 0.5, close - 0.5, close)
        })
        .collect()
}

fn wavy(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 50.0 + (i as f64 * 0.7).sin() * 4.0 + i as f64 * 0.05;
            let open = close + (i as f64 * 1.3).cos();
            bar(i, open, open.max(close) + 0.3, open.min(close) - 0.3, close)
        })
        .collect()
}

#[test]
fn test_every_oscillator_is_aligned() {
    let candles = wavy(80);
    for id in LINE_OSCILLATOR_IDS {
        let oscillator = line_oscillator(id, &Params::new()).unwrap();
        let series = oscillator.calculate(&candles);
        assert_eq!(series.len(), candles.len(), "{}", id);
        for (c, p) in candles.iter().zip(&series) {
            assert_eq!(c.time, p.time, "{}", id);
        }
    }
}

#[test]
fn test_warmup_prefix_is_nan() {
    let candles = wavy(80);
    for id in LINE_OSCILLATOR_IDS {
        let oscillator = line_oscillator(id, &Params::new()).unwrap();
        let series = oscillator.calculate(&candles);
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
fn test_calculation_is_idempotent() {
    let candles = wavy(60);
    let rsi = Rsi::new(14);
    let first: Vec<u64> = rsi.calculate(&candles).iter().map(|p| p.value.to_bits()).collect();
    let second: Vec<u64> = rsi.calculate(&candles).iter().map(|p| p.value.to_bits()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_short_input_is_all_nan() {
    let candles = wavy(5);
    for id in LINE_OSCILLATOR_IDS {
        let oscillator = line_oscillator(id, &Params::new()).unwrap();
        if oscillator.warmup() < candles.len() {
            continue;
        }
        let series = oscillator.calculate(&candles);
        assert_eq!(series.len(), 5);
        assert!(series.iter().all(|p| p.value.is_nan()), "{}", id);
    }
}

#[test]
fn test_empty_input() {
    for id in LINE_OSCILLATOR_IDS {
        let oscillator = line_oscillator(id, &Params::new()).unwrap();
        assert!(oscillator.calculate(&[]).is_empty());
    }
    assert!(Macd::default().calculate(&[]).is_empty());
    assert!(ema(&[], 9).is_empty());
}

#[test]
fn test_flat_series_rsi_starts_at_index_period_not_period_minus_one() {
    let candles = flat(30);

    // RSI(14) needs 14 deltas, so index 13 is still warming up and the
    // first neutral 50 lands on index 14.
    let rsi = Rsi::new(14).calculate(&candles);
    assert!(rsi[13].value.is_nan());
    assert!(rsi[..14].iter().all(|p| p.value.is_nan()));
    for p in &rsi[14..] {
        assert_eq!(p.value, 50.0);
    }

    let cci = Cci::new(20).calculate(&candles);
    assert!(cci[..19].iter().all(|p| p.value.is_nan()));
    for p in &cci[19..] {
        assert_eq!(p.value, 0.0);
    }
}

#[test]
fn test_rising_series_williams_r_and_rsi() {
    let candles = rising(40);

    let wr = WilliamsR::new(14).calculate(&candles);
    for p in &wr[13..] {
        assert!(p.value > -10.0 && p.value <= 0.0, "W%R {}", p.value);
    }

    let rsi = Rsi::new(14).calculate(&candles);
    for p in &rsi[14..] {
        assert_eq!(p.value, 100.0);
    }
}

#[test]
fn test_flat_williams_r_fallback() {
    let wr = WilliamsR::new(14).calculate(&flat(20));
    for p in &wr[13..] {
        assert_eq!(p.value, -50.0);
    }
}

#[test]
fn test_ema_legacy_seed() {
    let values = [2.0, 4.0, 6.0, 8.0, 10.0];
    let out = ema(&values, 3);
    assert_eq!(out[0], 2.0);
    assert_eq!(out[1], 3.0);
    assert_eq!(out[2], 4.0);
    // k = 0.5 from here on
    assert_eq!(out[3], 6.0);
    assert_eq!(out[4], 8.0);
}

#[test]
fn test_macd_components() {
    let candles = wavy(60);
    let series = Macd::new(12, 26, 9).calculate(&candles);
    assert_eq!(series.len(), 60);
    for i in 0..60 {
        let (m, s, h) = (
            series.macd[i].value,
            series.signal[i].value,
            series.histogram[i].value,
        );
        if m.is_finite() && s.is_finite() {
            assert!((h - (m - s)).abs() < 1e-9);
        } else {
            assert!(h.is_nan());
        }
    }
    assert!(series.macd[25].value.is_finite());
    assert!(series.macd[24].value.is_nan());
}
