//! Static indicator metadata.
//!
//! Drives default resolution, configuration bounds and the pane/overlay
//! split. Read-only: there is no way to register entries at runtime.

use crate::types::{IndicatorCategory, IndicatorMeta, ParamSpec, Params};

const PERIOD_14: &[ParamSpec] = &[ParamSpec::new("period", 14.0, 2.0, 100.0, 1.0)];
const PERIOD_20: &[ParamSpec] = &[ParamSpec::new("period", 20.0, 2.0, 100.0, 1.0)];
const PERIOD_20_MULT: &[ParamSpec] = &[
    ParamSpec::new("period", 20.0, 2.0, 100.0, 1.0),
    ParamSpec::new("mult", 2.0, 0.5, 5.0, 0.1),
];

const COMBO_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("minBuyScore", 2.0, 1.0, 4.0, 1.0),
    ParamSpec::new("minSellScore", 2.0, 1.0, 4.0, 1.0),
    ParamSpec::new("rsiBuy", 30.0, 5.0, 50.0, 1.0),
    ParamSpec::new("rsiSell", 70.0, 50.0, 95.0, 1.0),
    ParamSpec::new("wrBuy", -80.0, -100.0, -50.0, 1.0),
    ParamSpec::new("wrSell", -20.0, -50.0, 0.0, 1.0),
    ParamSpec::new("cciBuy", -100.0, -300.0, 0.0, 5.0),
    ParamSpec::new("cciSell", 100.0, 0.0, 300.0, 5.0),
    ParamSpec::new("rsiPeriod", 14.0, 2.0, 100.0, 1.0),
    ParamSpec::new("wrPeriod", 14.0, 2.0, 100.0, 1.0),
    ParamSpec::new("cciPeriod", 20.0, 2.0, 100.0, 1.0),
    ParamSpec::new("macdFast", 12.0, 2.0, 50.0, 1.0),
    ParamSpec::new("macdSlow", 26.0, 5.0, 100.0, 1.0),
    ParamSpec::new("macdSignal", 9.0, 2.0, 50.0, 1.0),
];

/// Vote thresholds plus one `<input>Dip` / `<input>Top` pair per HUNTER input.
const HUNTER_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("requiredDipScore", 3.0, 1.0, 15.0, 1.0),
    ParamSpec::new("requiredTopScore", 4.0, 1.0, 15.0, 1.0),
    ParamSpec::new("rsiDip", 30.0, 0.0, 100.0, 1.0),
    ParamSpec::new("rsiTop", 70.0, 0.0, 100.0, 1.0),
    ParamSpec::new("rsiFastDip", 20.0, 0.0, 100.0, 1.0),
    ParamSpec::new("rsiFastTop", 80.0, 0.0, 100.0, 1.0),
    ParamSpec::new("stochDip", 20.0, 0.0, 100.0, 1.0),
    ParamSpec::new("stochTop", 80.0, 0.0, 100.0, 1.0),
    ParamSpec::new("wrDip", -80.0, -100.0, 0.0, 1.0),
    ParamSpec::new("wrTop", -20.0, -100.0, 0.0, 1.0),
    ParamSpec::new("cciDip", -100.0, -300.0, 300.0, 5.0),
    ParamSpec::new("cciTop", 100.0, -300.0, 300.0, 5.0),
    ParamSpec::new("cmoDip", -50.0, -100.0, 100.0, 1.0),
    ParamSpec::new("cmoTop", 50.0, -100.0, 100.0, 1.0),
    ParamSpec::new("uoDip", 30.0, 0.0, 100.0, 1.0),
    ParamSpec::new("uoTop", 70.0, 0.0, 100.0, 1.0),
    ParamSpec::new("bbpDip", 0.0, -50.0, 150.0, 1.0),
    ParamSpec::new("bbpTop", 100.0, -50.0, 150.0, 1.0),
    ParamSpec::new("rocDip", -3.0, -50.0, 50.0, 0.5),
    ParamSpec::new("rocTop", 3.0, -50.0, 50.0, 0.5),
    ParamSpec::new("bopDip", -0.5, -1.0, 1.0, 0.05),
    ParamSpec::new("bopTop", 0.5, -1.0, 1.0, 0.05),
    ParamSpec::new("demDip", 30.0, 0.0, 100.0, 1.0),
    ParamSpec::new("demTop", 70.0, 0.0, 100.0, 1.0),
    ParamSpec::new("psyDip", 25.0, 0.0, 100.0, 1.0),
    ParamSpec::new("psyTop", 75.0, 0.0, 100.0, 1.0),
    ParamSpec::new("zscoreDip", -2.0, -5.0, 5.0, 0.1),
    ParamSpec::new("zscoreTop", 2.0, -5.0, 5.0, 0.1),
    ParamSpec::new("kbpDip", 0.0, -50.0, 150.0, 1.0),
    ParamSpec::new("kbpTop", 100.0, -50.0, 150.0, 1.0),
    ParamSpec::new("mfiDip", 20.0, 0.0, 100.0, 1.0),
    ParamSpec::new("mfiTop", 80.0, 0.0, 100.0, 1.0),
];

/// Every known indicator, panes first, then overlays.
pub const INDICATORS: &[IndicatorMeta] = &[
    IndicatorMeta {
        id: "rsi",
        name: "Relative Strength Index",
        short_name: "RSI",
        description: "Wilder-smoothed ratio of average gains to average losses.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "macd",
        name: "Moving Average Convergence Divergence",
        short_name: "MACD",
        description: "Fast minus slow EMA of the close, with its signal line and histogram.",
        category: IndicatorCategory::Trend,
        is_overlay: false,
        params: &[
            ParamSpec::new("fast", 12.0, 2.0, 50.0, 1.0),
            ParamSpec::new("slow", 26.0, 5.0, 100.0, 1.0),
            ParamSpec::new("signal", 9.0, 2.0, 50.0, 1.0),
        ],
    },
    IndicatorMeta {
        id: "wr",
        name: "Williams %R",
        short_name: "W%R",
        description: "Close relative to the trailing high-low range, from 0 to -100.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "cci",
        name: "Commodity Channel Index",
        short_name: "CCI",
        description: "Typical price deviation from its mean, scaled by mean absolute deviation.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_20,
    },
    IndicatorMeta {
        id: "cmo",
        name: "Chande Momentum Oscillator",
        short_name: "CMO",
        description: "Net up-move share of total close movement, from -100 to 100.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "uo",
        name: "Ultimate Oscillator",
        short_name: "UO",
        description: "Buying pressure over true range on three horizons, weighted 4:2:1.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: &[
            ParamSpec::new("p1", 7.0, 2.0, 50.0, 1.0),
            ParamSpec::new("p2", 14.0, 2.0, 100.0, 1.0),
            ParamSpec::new("p3", 28.0, 2.0, 200.0, 1.0),
        ],
    },
    IndicatorMeta {
        id: "bbp",
        name: "Bollinger %B",
        short_name: "%B",
        description: "Close position inside the Bollinger band, 0 at lower and 100 at upper.",
        category: IndicatorCategory::Volatility,
        is_overlay: false,
        params: PERIOD_20_MULT,
    },
    IndicatorMeta {
        id: "roc",
        name: "Rate of Change",
        short_name: "ROC",
        description: "Percent change of the close over the period.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "bop",
        name: "Balance of Power",
        short_name: "BOP",
        description: "Body of the bar relative to its range.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: &[],
    },
    IndicatorMeta {
        id: "dem",
        name: "DeMarker",
        short_name: "DeM",
        description: "Upward extension share of total high/low extension.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "psy",
        name: "Psychological Line",
        short_name: "PSY",
        description: "Percentage of up-closes in the window.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: &[ParamSpec::new("period", 12.0, 2.0, 100.0, 1.0)],
    },
    IndicatorMeta {
        id: "zscore",
        name: "Z-Score",
        short_name: "Z",
        description: "Close distance from its mean in standard deviations.",
        category: IndicatorCategory::Volatility,
        is_overlay: false,
        params: PERIOD_20,
    },
    IndicatorMeta {
        id: "kbp",
        name: "Keltner %B",
        short_name: "K%B",
        description: "Close position inside the EMA/ATR Keltner channel.",
        category: IndicatorCategory::Volatility,
        is_overlay: false,
        params: PERIOD_20_MULT,
    },
    IndicatorMeta {
        id: "stoch",
        name: "Stochastic %K",
        short_name: "%K",
        description: "Close relative to the trailing high-low range, from 0 to 100.",
        category: IndicatorCategory::Momentum,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "mfi",
        name: "Money Flow Index",
        short_name: "MFI",
        description: "Volume-weighted RSI of the typical price.",
        category: IndicatorCategory::Volume,
        is_overlay: false,
        params: PERIOD_14,
    },
    IndicatorMeta {
        id: "combo",
        name: "COMBO Signal",
        short_name: "COMBO",
        description: "MACD, RSI, Williams %R and CCI vote for buy and sell markers.",
        category: IndicatorCategory::Composite,
        is_overlay: true,
        params: COMBO_PARAMS,
    },
    IndicatorMeta {
        id: "hunter",
        name: "HUNTER Signal",
        short_name: "HUNTER",
        description: "Fifteen oscillators vote for dip (buy) and top (sell) markers.",
        category: IndicatorCategory::Composite,
        is_overlay: true,
        params: HUNTER_PARAMS,
    },
];

/// Look up an indicator by id.
pub fn meta(id: &str) -> Option<&'static IndicatorMeta> {
    INDICATORS.iter().find(|m| m.id == id)
}

/// Indicators drawn on their own pane.
pub fn panes() -> impl Iterator<Item = &'static IndicatorMeta> {
    INDICATORS.iter().filter(|m| !m.is_overlay)
}

/// Indicators drawn as markers on the price pane.
pub fn overlays() -> impl Iterator<Item = &'static IndicatorMeta> {
    INDICATORS.iter().filter(|m| m.is_overlay)
}

/// Registry defaults for `id`, overlaid with the caller's partial overrides.
///
/// Keys outside the schema pass through untouched. Unknown ids return the
/// overrides as-is.
pub fn resolve_params(id: &str, overrides: &Params) -> Params {
    let mut resolved: Params = meta(id)
        .map(|m| {
            m.params
                .iter()
                .map(|p| (p.key.to_string(), p.default))
                .collect()
        })
        .unwrap_or_default();
    for (key, value) in overrides {
        resolved.insert(key.clone(), *value);
    }
    resolved
}

/// Whether `value` lies inside the schema bounds of `id.key`.
///
/// `None` when the indicator or parameter is not in the registry.
pub fn validate_param(id: &str, key: &str, value: f64) -> Option<bool> {
    meta(id)?.param(key).map(|p| p.contains(value))
}
