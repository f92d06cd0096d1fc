pub mod compute;
pub mod flash;
pub mod registry;
pub mod signals;
pub mod worker;

pub use compute::compute_indicators;
pub use flash::FlashStore;
pub use signals::{Combo, ComboParams, Hunter, HunterParams, Oscillator};
pub use worker::{ComputeWorker, RequestTracker};
