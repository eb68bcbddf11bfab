//! Fallback classification service: remote first, lexical on failure.

use std::sync::Arc;

use lahja_core::Result;
use lahja_lexicon::{Language, LexicalClassifier};
use tracing::{debug, warn};

use crate::client::RemoteClassifier;
use crate::types::{Classification, ClassificationSource};

/// Dialect classification entry point shared by all front-ends.
#[derive(Clone)]
pub struct DialectService {
    remote: Arc<dyn RemoteClassifier>,
    lexical: LexicalClassifier,
}

impl DialectService {
    pub fn new(remote: Arc<dyn RemoteClassifier>, lexical: LexicalClassifier) -> Self {
        Self { remote, lexical }
    }

    pub fn remote(&self) -> &Arc<dyn RemoteClassifier> {
        &self.remote
    }

    pub fn lexical(&self) -> &LexicalClassifier {
        &self.lexical
    }

    /// Classify `text`, preferring the remote classifier.
    ///
    /// Remote errors are logged and absorbed; only lexical pipeline errors
    /// (invariant violations) reach the caller. No retries are attempted.
    pub async fn classify(&self, text: &str, language: Language) -> Result<Classification> {
        if self.remote.is_available() {
            match self.remote.classify(text, language).await {
                Ok(results) => {
                    debug!(
                        "Remote classifier '{}' returned {} results",
                        self.remote.name(),
                        results.len()
                    );
                    return Ok(Classification {
                        results,
                        source: ClassificationSource::Remote,
                    });
                }
                Err(e) => {
                    warn!(
                        "Remote classifier '{}' failed: {}. Falling back to lexical.",
                        self.remote.name(),
                        e
                    );
                }
            }
        }

        self.classify_lexical(text, language)
    }

    /// Run only the lexical pipeline.
    pub fn classify_lexical(&self, text: &str, language: Language) -> Result<Classification> {
        Ok(Classification {
            results: self.lexical.classify(text, language)?,
            source: ClassificationSource::Lexical,
        })
    }
}
