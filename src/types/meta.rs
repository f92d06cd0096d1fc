use serde::Serialize;

/// Category of an indicator in the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
    Composite,
}

/// UI bounds for one tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub key: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamSpec {
    pub const fn new(key: &'static str, default: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            key,
            default,
            min,
            max,
            step,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Static registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub category: IndicatorCategory,
    /// Drawn as buy/sell markers on the price pane rather than its own pane.
    pub is_overlay: bool,
    pub params: &'static [ParamSpec],
}

impl IndicatorMeta {
    pub fn param(&self, key: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.key == key)
    }

    pub fn default_param(&self, key: &str) -> Option<f64> {
        self.param(key).map(|p| p.default)
    }
}
