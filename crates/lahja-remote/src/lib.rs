//! Lahja Remote — remote classifier adapter with lexical fallback.
//!
//! `create_remote` picks `HttpRemoteClassifier` when an endpoint is
//! configured and `UnavailableRemote` otherwise. `DialectService` tries the
//! remote classifier first and runs the lexical pipeline when it fails.

pub mod client;
pub mod service;
pub mod types;

pub use client::{HttpRemoteClassifier, RemoteClassifier, UnavailableRemote};
pub use service::DialectService;
pub use types::*;

use std::sync::Arc;

use lahja_core::RemoteSettings;

/// Create the best available remote classifier for the given settings.
pub fn create_remote(settings: &RemoteSettings) -> Arc<dyn RemoteClassifier> {
    match settings.endpoint.as_deref() {
        Some(endpoint) => match HttpRemoteClassifier::new(endpoint, settings.timeout_ms) {
            Ok(remote) => {
                tracing::info!(
                    "Using remote classifier at {} (timeout {}ms)",
                    endpoint,
                    settings.timeout_ms
                );
                return Arc::new(remote);
            }
            Err(e) => {
                tracing::warn!("Remote classifier unavailable: {}. Using lexical only.", e);
            }
        },
        None => {
            tracing::info!("No remote classifier configured. Using lexical only.");
        }
    }

    Arc::new(UnavailableRemote)
}
