//! Shared lexicon types.

use std::fmt;
use std::str::FromStr;

use lahja_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Input language. Each language has its own dictionary and result policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arabic" => Ok(Language::Arabic),
            "english" => Ok(Language::English),
            other => Err(Error::InvalidArgument(format!(
                "unsupported language '{}' (expected arabic or english)",
                other
            ))),
        }
    }
}

/// Presentation metadata for one dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialectInfo {
    #[serde(rename = "name")]
    pub display_name: &'static str,
    pub description: &'static str,
}

/// One ranked dialect label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Display name, not the dictionary identifier.
    pub dialect: String,
    /// Heuristic match strength in [0, 1].
    pub confidence: f64,
    pub description: String,
}

impl ClassificationResult {
    pub fn new(dialect: impl Into<String>, confidence: f64, description: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            confidence,
            description: description.into(),
        }
    }
}

/// Per-dialect score accumulators, kept in dictionary order.
///
/// Scores are never negative and never NaN; storing such a value is an
/// invariant violation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set a score. Existing identifiers keep their position.
    pub fn insert(&mut self, id: impl Into<String>, score: f64) -> Result<()> {
        let id = id.into();
        check_score(&id, score)?;
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((id, score)),
        }
        Ok(())
    }

    /// Add `weight` to an existing accumulator.
    pub fn add(&mut self, id: &str, weight: f64) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(k, _)| k == id)
            .ok_or_else(|| {
                Error::InvariantViolation(format!("score table has no entry for '{}'", id))
            })?;
        let updated = entry.1 + weight;
        check_score(id, updated)?;
        entry.1 = updated;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_score(id: &str, score: f64) -> Result<()> {
    if score.is_nan() || score < 0.0 {
        return Err(Error::InvariantViolation(format!(
            "score for '{}' must be non-negative, got {}",
            id, score
        )));
    }
    Ok(())
}
