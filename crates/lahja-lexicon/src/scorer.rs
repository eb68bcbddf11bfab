//! Marker scorer: text + dictionary → ScoreTable.

use std::collections::BTreeMap;

use lahja_core::Result;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::types::ScoreTable;
use crate::weighting::MatchWeight;

/// Accumulates weighted marker matches per dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorer {
    weight: MatchWeight,
    baselines: BTreeMap<String, f64>,
}

impl Scorer {
    pub fn new(weight: MatchWeight) -> Self {
        Self {
            weight,
            baselines: BTreeMap::new(),
        }
    }

    /// Starting scores per dialect identifier. Identifiers absent from the
    /// dictionary being scored are never read.
    pub fn with_baselines(mut self, baselines: BTreeMap<String, f64>) -> Self {
        self.baselines = baselines;
        self
    }

    pub fn weight(&self) -> MatchWeight {
        self.weight
    }

    pub fn baselines(&self) -> &BTreeMap<String, f64> {
        &self.baselines
    }

    /// Score `text` against every marker of every dialect in `dictionary`.
    ///
    /// Each marker counts once if present, however often it occurs. A
    /// substring may match markers of several dialects.
    pub fn score(&self, dictionary: &Dictionary, text: &str) -> Result<ScoreTable> {
        let haystack = if dictionary.case_insensitive() {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut table = ScoreTable::with_capacity(dictionary.len());
        let mut matched = 0usize;

        for entry in dictionary.entries() {
            let baseline = self.baselines.get(entry.id).copied().unwrap_or(0.0);
            table.insert(entry.id, baseline)?;

            for (index, marker) in entry.markers.iter().enumerate() {
                let found = if dictionary.case_insensitive() {
                    haystack.contains(&marker.to_lowercase())
                } else {
                    haystack.contains(marker)
                };
                if found {
                    matched += 1;
                    table.add(entry.id, self.weight.weight(index, marker))?;
                }
            }
        }

        debug!(
            "Scored {} text: {} marker matches across {} dialects",
            dictionary.language(),
            matched,
            dictionary.len()
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lahja_core::{Error, WeightingPolicy};

    const EPS: f64 = 1e-9;

    fn english_scorer() -> Scorer {
        Scorer::new(MatchWeight::Flat(0.4))
            .with_baselines(BTreeMap::from([("american".to_string(), 0.3)]))
    }

    #[test]
    fn test_every_dialect_present() {
        let table = Scorer::new(WeightingPolicy::PositionTiered.into())
            .score(Dictionary::arabic(), "no markers here")
            .unwrap();
        assert_eq!(table.len(), Dictionary::arabic().len());
        assert!(table.iter().all(|(_, s)| s == 0.0));
    }

    #[test]
    fn test_egyptian_first_marker() {
        let table = Scorer::new(WeightingPolicy::PositionTiered.into())
            .score(Dictionary::arabic(), "إيه")
            .unwrap();
        assert!((table.get("egyptian").unwrap() - 0.6).abs() < EPS);
        assert!(table
            .iter()
            .filter(|(id, _)| *id != "egyptian")
            .all(|(_, s)| s == 0.0));
    }

    #[test]
    fn test_presence_not_frequency() {
        let scorer = english_scorer();
        let once = scorer.score(Dictionary::english(), "a lorry").unwrap();
        let thrice = scorer
            .score(Dictionary::english(), "lorry lorry lorry")
            .unwrap();
        assert_eq!(once.get("british"), thrice.get("british"));
    }

    #[test]
    fn test_english_case_folding_and_baseline() {
        let table = english_scorer()
            .score(Dictionary::english(), "My LORRY ran out of Petrol")
            .unwrap();
        assert!((table.get("british").unwrap() - 0.8).abs() < EPS);
        assert!((table.get("american").unwrap() - 0.3).abs() < EPS);
        assert_eq!(table.get("australian"), Some(0.0));
        assert_eq!(table.get("canadian"), Some(0.0));
    }

    #[test]
    fn test_arabic_is_exact_match() {
        // Differs from "إيه" only in the hamza
        let table = Scorer::new(WeightingPolicy::PositionTiered.into())
            .score(Dictionary::arabic(), "اية")
            .unwrap();
        assert_eq!(table.get("egyptian"), Some(0.0));
    }

    #[test]
    fn test_shared_substring_scores_each_dialect() {
        // "شلون" (iraqi) sits inside "شلونك" (gulf)
        let table = Scorer::new(WeightingPolicy::PositionTiered.into())
            .score(Dictionary::arabic(), "شلونك")
            .unwrap();
        assert!(table.get("gulf").unwrap() > 0.0);
        assert!(table.get("iraqi").unwrap() > 0.0);
    }

    #[test]
    fn test_phrase_policy_changes_weight() {
        let text = "شكو ماكو";
        let position = Scorer::new(WeightingPolicy::PositionTiered.into())
            .score(Dictionary::arabic(), text)
            .unwrap();
        let phrase = Scorer::new(WeightingPolicy::PhraseAwareTiered.into())
            .score(Dictionary::arabic(), text)
            .unwrap();
        // Matches "شكو ماكو" (index 0), "اكو" (1) and "ماكو" (2)
        assert!((position.get("iraqi").unwrap() - 1.8).abs() < EPS);
        assert!((phrase.get("iraqi").unwrap() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_negative_weight_is_invariant_violation() {
        let err = Scorer::new(MatchWeight::Flat(-1.0))
            .score(Dictionary::english(), "lorry")
            .unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }
}
