//! Shared application state.

use std::sync::Arc;

use lahja_core::{LahjaConfig, WeightingPolicy};
use lahja_lexicon::LexicalClassifier;
use lahja_remote::DialectService;
use parking_lot::RwLock;
use tracing::info;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: RwLock<LahjaConfig>,
    service: RwLock<Arc<DialectService>>,
}

impl AppState {
    pub fn new(config: LahjaConfig) -> lahja_core::Result<Self> {
        let remote = lahja_remote::create_remote(&config.remote);
        let lexical = LexicalClassifier::new(&config.lexicon)?;
        let service = DialectService::new(remote, lexical);

        Ok(Self {
            config: RwLock::new(config),
            service: RwLock::new(Arc::new(service)),
        })
    }

    /// Current service snapshot. Handlers hold it across `.await`, never the lock.
    pub fn service(&self) -> Arc<DialectService> {
        self.service.read().clone()
    }

    /// Swap the Arabic weighting policy, persist it, and rebuild the lexical pipeline.
    pub fn set_weighting(&self, policy: WeightingPolicy) -> lahja_core::Result<()> {
        let mut config = self.config.write();
        let mut updated = config.clone();
        updated.lexicon.weighting = policy;
        let lexical = LexicalClassifier::new(&updated.lexicon)?;

        // Nothing is committed until the new settings are on disk
        updated.save()?;

        let remote = self.service.read().remote().clone();
        *self.service.write() = Arc::new(DialectService::new(remote, lexical));
        *config = updated;
        info!("Weighting policy set to {}", policy);
        Ok(())
    }
}
