//! Lahja Core — error type, configuration, settings loading.

pub mod config;
pub mod error;

pub use config::{LahjaConfig, LexiconSettings, RemoteSettings, WeightingPolicy};
pub use error::{Error, Result};
