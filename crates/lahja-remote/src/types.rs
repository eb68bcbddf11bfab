//! Remote classifier wire types and classification output.

use lahja_lexicon::{ClassificationResult, Language};
use serde::{Deserialize, Serialize};

/// Request body sent to the remote classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRequest {
    pub text: String,
    pub language: Language,
}

/// Response body expected from the remote classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub results: Vec<ClassificationResult>,
}

/// Which path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Remote,
    Lexical,
}

impl std::fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassificationSource::Remote => write!(f, "remote"),
            ClassificationSource::Lexical => write!(f, "lexical"),
        }
    }
}

/// Ranked results plus the path that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub results: Vec<ClassificationResult>,
    pub source: ClassificationSource,
}
