//! Request-scoped indicator computation.
//!
//! Turns one [`ComputeRequest`] into one [`ComputeResponse`]. Synchronous and
//! pure; the worker runs it on the blocking pool.

use crate::services::registry::resolve_params;
use crate::services::signals::indicators::{line_oscillator, Macd};
use crate::services::signals::{Combo, Hunter};
use crate::types::{
    defined_points, Candle, CandleTime, ComputeRequest, ComputeResponse, IndicatorDescriptor,
    OverlaySignal, Overlays, PaneSeries, TradeSignal,
};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

/// Compute every visible descriptor of a request.
pub fn compute_indicators(request: &ComputeRequest) -> ComputeResponse {
    let started = Instant::now();
    let candles = &request.candles;

    let mut panes = BTreeMap::new();
    let mut overlays = Overlays::default();

    for descriptor in request.indicators.iter().filter(|d| d.visible) {
        if descriptor.is_overlay {
            compute_overlay(descriptor, candles, &mut overlays);
        } else if let Some(pane) = compute_pane(descriptor, candles) {
            panes.insert(descriptor.id.clone(), pane);
        }
    }

    let compute_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "Computed request {} ({} candles, {} panes) in {:.2}ms",
        request.request_id,
        candles.len(),
        panes.len(),
        compute_ms
    );

    ComputeResponse {
        request_id: request.request_id,
        compute_ms,
        panes,
        overlays,
    }
}

/// Pane series for a non-overlay descriptor, `None` for unknown ids.
pub fn compute_pane(descriptor: &IndicatorDescriptor, candles: &[Candle]) -> Option<PaneSeries> {
    let params = resolve_params(&descriptor.id, &descriptor.params);

    if descriptor.id == "macd" {
        let series = Macd::from_params(&params).calculate(candles);
        return Some(PaneSeries::Macd {
            macd: defined_points(series.macd),
            signal: defined_points(series.signal),
            histogram: defined_points(series.histogram),
        });
    }

    let oscillator = line_oscillator(&descriptor.id, &params)?;
    Some(PaneSeries::Line {
        line: defined_points(oscillator.calculate(candles)),
    })
}

fn compute_overlay(descriptor: &IndicatorDescriptor, candles: &[Candle], overlays: &mut Overlays) {
    let params = resolve_params(&descriptor.id, &descriptor.params);

    match descriptor.id.as_str() {
        "combo" => {
            overlays.combo = markers(
                Combo::from_params(&params)
                    .calculate(candles)
                    .into_iter()
                    .map(|row| (row.time, row.signal)),
            );
        }
        "hunter" => {
            overlays.hunter = markers(
                Hunter::from_params(&params)
                    .calculate(candles)
                    .into_iter()
                    .map(|row| (row.time, row.signal)),
            );
        }
        _ => {}
    }
}

/// Keep only bars that carry a signal.
fn markers(rows: impl Iterator<Item = (CandleTime, Option<TradeSignal>)>) -> Vec<OverlaySignal> {
    rows.filter_map(|(time, signal)| signal.map(|signal| OverlaySignal { time, signal }))
        .collect()
}
