use super::{Candle, CandleTime, IndicatorSeries, TradeSignal};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Parameter name to numeric value. Partial maps are legal; missing keys
/// resolve to registry defaults.
pub type Params = HashMap<String, f64>;

/// One configured indicator on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorDescriptor {
    pub id: String,
    #[serde(default)]
    pub params: Params,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub is_overlay: bool,
}

fn default_visible() -> bool {
    true
}

impl IndicatorDescriptor {
    /// Visible pane descriptor with default parameters.
    pub fn pane(id: &str) -> Self {
        Self {
            id: id.to_string(),
            params: Params::new(),
            visible: true,
            is_overlay: false,
        }
    }

    /// Visible overlay descriptor with default parameters.
    pub fn overlay(id: &str) -> Self {
        Self {
            is_overlay: true,
            ..Self::pane(id)
        }
    }

    pub fn with_param(mut self, key: &str, value: f64) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }
}

/// Work submitted to the compute worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    pub request_id: u64,
    pub candles: Vec<Candle>,
    pub indicators: Vec<IndicatorDescriptor>,
}

/// A pane series with undefined points already removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PaneSeries {
    Line {
        line: IndicatorSeries,
    },
    Macd {
        macd: IndicatorSeries,
        signal: IndicatorSeries,
        histogram: IndicatorSeries,
    },
}

/// Compact chart marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySignal {
    pub time: CandleTime,
    pub signal: TradeSignal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overlays {
    #[serde(default)]
    pub combo: Vec<OverlaySignal>,
    #[serde(default)]
    pub hunter: Vec<OverlaySignal>,
}

impl Overlays {
    pub fn is_empty(&self) -> bool {
        self.combo.is_empty() && self.hunter.is_empty()
    }
}

/// Result of one [`ComputeRequest`], correlated by `request_id` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub request_id: u64,
    pub compute_ms: f64,
    pub panes: BTreeMap<String, PaneSeries>,
    pub overlays: Overlays,
}

impl ComputeResponse {
    /// Reply with no panes and no overlays, used when a request could not be computed.
    pub fn empty(request_id: u64) -> Self {
        Self {
            request_id,
            compute_ms: 0.0,
            panes: BTreeMap::new(),
            overlays: Overlays::default(),
        }
    }
}

/// Message accepted by the worker boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerMessage {
    #[serde(rename = "compute-indicators")]
    ComputeIndicators(ComputeRequest),
}

impl WorkerMessage {
    /// Parse one NDJSON line.
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

/// Message emitted by the worker boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerReply {
    #[serde(rename = "compute-indicators-result")]
    ComputeIndicatorsResult(ComputeResponse),
}

impl WorkerReply {
    /// Encode as one newline-terminated NDJSON line.
    pub fn to_line(&self) -> Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}
