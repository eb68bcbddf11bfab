//! Marker weight tables.
//!
//! Tiered policies reward markers near the front of a dialect's list, which
//! are the most distinctive. English matches use a single flat weight.

use lahja_core::WeightingPolicy;

pub const PHRASE_WEIGHT: f64 = 0.8;

/// How much a single marker match contributes to its dialect's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchWeight {
    Tiered(WeightingPolicy),
    Flat(f64),
}

impl MatchWeight {
    /// Weight of the marker at `index` in its dialect's list.
    pub fn weight(&self, index: usize, marker: &str) -> f64 {
        match self {
            MatchWeight::Flat(w) => *w,
            MatchWeight::Tiered(WeightingPolicy::PositionTiered) => tier(index, 3, 6),
            MatchWeight::Tiered(WeightingPolicy::PhraseAwareTiered) => {
                if is_phrase(marker) {
                    PHRASE_WEIGHT
                } else {
                    tier(index, 4, 7)
                }
            }
        }
    }
}

impl From<WeightingPolicy> for MatchWeight {
    fn from(policy: WeightingPolicy) -> Self {
        MatchWeight::Tiered(policy)
    }
}

fn tier(index: usize, first: usize, second: usize) -> f64 {
    if index < first {
        0.6
    } else if index < second {
        0.4
    } else {
        0.3
    }
}

/// A marker with a space or question mark (Latin or Arabic) counts as a phrase.
pub fn is_phrase(marker: &str) -> bool {
    marker.contains(' ') || marker.contains('?') || marker.contains('؟')
}
