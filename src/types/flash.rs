use serde::{Deserialize, Serialize};

/// Direction of a transient price highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashDirection {
    Up,
    Down,
}

impl FlashDirection {
    /// Compare a new price against the previous one. Equal prices do not flash.
    pub fn between(previous: f64, current: f64) -> Option<Self> {
        if current > previous {
            Some(FlashDirection::Up)
        } else if current < previous {
            Some(FlashDirection::Down)
        } else {
            None
        }
    }
}

/// Latest known state of one ticker key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickerState {
    pub price: f64,
    pub flash: Option<FlashDirection>,
}
