//! Simple moving average and window statistics.

/// Simple moving average over a trailing window that includes the current index.
///
/// Indices before `period - 1` are NaN.
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let mut out = vec![f64::NAN; data.len()];

    for i in (period - 1)..data.len() {
        out[i] = mean(&data[(i + 1 - period)..=i]);
    }

    out
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around `mean`.
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
