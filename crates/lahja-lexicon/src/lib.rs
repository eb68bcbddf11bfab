//! Lahja Lexicon — lexical dialect scoring and ranking.
//!
//! Each supported language has a static keyword dictionary and a parallel
//! metadata table. A `Scorer` walks the input text against every marker and
//! accumulates weighted scores into a `ScoreTable`; a `ResultBuilder` turns
//! that table into the final ranked `ClassificationResult` list.
//! `LexicalClassifier` wires one pipeline per language.

pub mod builder;
pub mod classifier;
pub mod dictionaries;
pub mod dictionary;
pub mod scorer;
pub mod types;
pub mod weighting;

pub use builder::{ResultBuilder, ResultPolicy};
pub use classifier::LexicalClassifier;
pub use dictionary::{DialectEntry, Dictionary};
pub use scorer::Scorer;
pub use types::*;
pub use weighting::MatchWeight;
