//! Exponential moving average with the legacy warm-up.

/// Exponential moving average with multiplier `2 / (period + 1)`.
///
/// Warm-up, kept for parity with previously published signals:
/// - index 0 is the raw value
/// - indices `1..period-1` are the running mean of everything seen so far
/// - index `period - 1` is the mean of the first `period` values
/// - later indices use `(value - prev) * k + prev`
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(data.len());
    let mut sum = 0.0;

    for (i, &value) in data.iter().enumerate() {
        let next = if i == 0 {
            sum = value;
            value
        } else if i < period {
            sum += value;
            sum / (i + 1) as f64
        } else {
            let prev = out[i - 1];
            (value - prev) * k + prev
        };
        out.push(next);
    }

    out
}
