pub mod candle;
pub mod compute;
pub mod flash;
pub mod meta;
pub mod series;
pub mod signal;

pub use candle::*;
pub use compute::*;
pub use flash::*;
pub use meta::*;
pub use series::*;
pub use signal::*;
