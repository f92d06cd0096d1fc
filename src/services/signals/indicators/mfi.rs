//! Money Flow Index (MFI) indicator.

use crate::services::signals::{period_param, Oscillator};
use crate::types::{align, Candle, IndicatorSeries, Params};

/// MFI (Money Flow Index).
///
/// Volume-weighted RSI over the last `period` typical-price deltas:
/// MFI = 100 - (100 / (1 + Money Flow Ratio))
///
/// 100 with no negative flow, 0 with no positive flow, 50 with neither.
pub struct Mfi {
    period: usize,
}

impl Default for Mfi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Mfi {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(period_param(params, "period", Self::default().period))
    }
}

impl Oscillator for Mfi {
    fn id(&self) -> &str {
        "mfi"
    }

    fn name(&self) -> &str {
        "MFI"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorSeries {
        let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();
        let mut values = vec![f64::NAN; candles.len()];

        for i in self.warmup()..candles.len() {
            let mut positive_flow = 0.0;
            let mut negative_flow = 0.0;

            for j in (i + 1 - self.period)..=i {
                let money_flow = typical[j] * candles[j].volume;
                if typical[j] > typical[j - 1] {
                    positive_flow += money_flow;
                } else if typical[j] < typical[j - 1] {
                    negative_flow += money_flow;
                }
            }

            values[i] = if positive_flow == 0.0 && negative_flow == 0.0 {
                50.0
            } else if negative_flow == 0.0 {
                100.0
            } else if positive_flow == 0.0 {
                0.0
            } else {
                let money_flow_ratio = positive_flow / negative_flow;
                100.0 - (100.0 / (1.0 + money_flow_ratio))
            };
        }

        align(candles, values)
    }
}
