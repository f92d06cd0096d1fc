//! Kahin - technical-indicator and composite signal engine

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use error::{EngineError, Result};
