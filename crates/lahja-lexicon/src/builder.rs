//! Result builder: ScoreTable → ranked ClassificationResult list.
//!
//! Steps, applied in order:
//! 1. substitute fixed defaults for dialects whose score is exactly zero
//! 2. drop scores that are zero or below the policy minimum
//! 3. clamp to the policy ceiling
//! 4. join display metadata (identifier + generic description on a miss)
//! 5. stable sort by descending confidence
//! 6. truncate to the policy limit, reserving slots for always-listed dialects
//! 7. substitute the fallback result if nothing survived

use lahja_core::{Error, Result};

use crate::dictionaries::{arabic, english};
use crate::dictionary::Dictionary;
use crate::types::{ClassificationResult, Language, ScoreTable};

pub const GENERIC_DESCRIPTION: &str = "Detected based on keyword analysis";

/// Per-language shaping rules for the final result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPolicy {
    /// Confidence shown for listed dialects whose score stayed exactly zero.
    pub zero_score_defaults: Vec<(String, f64)>,
    /// Scores below this are dropped. Zero scores are always dropped.
    pub min_score: f64,
    /// Confidence ceiling.
    pub cap: f64,
    pub max_results: Option<usize>,
    /// Dialects that displace lower-ranked entries rather than fall off the
    /// end when the list is truncated.
    pub always_listed: Vec<String>,
    /// Returned alone when no dialect survives filtering.
    pub fallback: Option<ClassificationResult>,
}

impl ResultPolicy {
    /// Keep every positive score, cap at 0.9, fall back to Modern Standard Arabic.
    pub fn arabic() -> Self {
        Self {
            zero_score_defaults: Vec::new(),
            min_score: 0.0,
            cap: 0.9,
            max_results: None,
            always_listed: Vec::new(),
            fallback: Some(ClassificationResult::new(
                arabic::FALLBACK_DIALECT,
                arabic::FALLBACK_CONFIDENCE,
                arabic::FALLBACK_DESCRIPTION,
            )),
        }
    }

    /// Fixed defaults for silent varieties, 0.05 floor, top three.
    pub fn english() -> Self {
        Self {
            zero_score_defaults: english::ZERO_SCORE_DEFAULTS
                .iter()
                .map(|(id, c)| (id.to_string(), *c))
                .collect(),
            min_score: 0.05,
            cap: 1.0,
            max_results: Some(3),
            always_listed: english::ALWAYS_LISTED
                .iter()
                .map(|id| id.to_string())
                .collect(),
            fallback: None,
        }
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Arabic => Self::arabic(),
            Language::English => Self::english(),
        }
    }

    fn zero_default(&self, id: &str) -> Option<f64> {
        self.zero_score_defaults
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, c)| *c)
    }

    fn is_always_listed(&self, id: &str) -> bool {
        self.always_listed.iter().any(|k| k == id)
    }
}

/// Applies a `ResultPolicy` to score tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBuilder {
    policy: ResultPolicy,
}

impl ResultBuilder {
    /// Every confidence the policy can emit must already lie in [0, 1].
    pub fn new(policy: ResultPolicy) -> Result<Self> {
        let in_unit = |c: f64| (0.0..=1.0).contains(&c);
        if !in_unit(policy.cap) || !policy.min_score.is_finite() {
            return Err(Error::InvariantViolation(format!(
                "result policy cap {} / min_score {} out of range",
                policy.cap, policy.min_score
            )));
        }
        if let Some((id, c)) = policy
            .zero_score_defaults
            .iter()
            .find(|(_, c)| !in_unit(*c))
        {
            return Err(Error::InvariantViolation(format!(
                "default confidence {} for '{}' out of range",
                c, id
            )));
        }
        if let Some(fallback) = &policy.fallback {
            if !in_unit(fallback.confidence) {
                return Err(Error::InvariantViolation(format!(
                    "fallback confidence {} out of range",
                    fallback.confidence
                )));
            }
        }
        Ok(Self { policy })
    }

    pub fn for_language(language: Language) -> Result<Self> {
        Self::new(ResultPolicy::for_language(language))
    }

    pub fn policy(&self) -> &ResultPolicy {
        &self.policy
    }

    /// Build the ranked list. `dictionary` supplies display metadata only.
    pub fn build(
        &self,
        table: &ScoreTable,
        dictionary: &Dictionary,
    ) -> Result<Vec<ClassificationResult>> {
        let policy = &self.policy;

        let mut ranked: Vec<(&str, ClassificationResult)> = table
            .iter()
            .map(|(id, score)| {
                let score = if score == 0.0 {
                    policy.zero_default(id).unwrap_or(0.0)
                } else {
                    score
                };
                (id, score)
            })
            .filter(|(_, score)| *score > 0.0 && *score >= policy.min_score)
            .map(|(id, score)| {
                let confidence = score.min(policy.cap);
                let result = match dictionary.info(id) {
                    Some(info) => {
                        ClassificationResult::new(info.display_name, confidence, info.description)
                    }
                    None => ClassificationResult::new(id, confidence, GENERIC_DESCRIPTION),
                };
                (id, result)
            })
            .collect();

        // Stable: equal confidences keep table (dictionary) order
        ranked.sort_by(|a, b| b.1.confidence.total_cmp(&a.1.confidence));

        if let Some(limit) = policy.max_results {
            truncate_keeping(&mut ranked, limit, |id| policy.is_always_listed(id));
        }

        let mut results: Vec<ClassificationResult> =
            ranked.into_iter().map(|(_, result)| result).collect();

        if results.is_empty() {
            if let Some(fallback) = &policy.fallback {
                results.push(fallback.clone());
            }
        }

        Ok(results)
    }
}

/// Keep at most `limit` entries of a ranked list. Entries matching `reserved`
/// claim their slots first; the rest go to the highest-ranked others. Rank
/// order is preserved.
fn truncate_keeping<T>(
    ranked: &mut Vec<(&str, T)>,
    limit: usize,
    reserved: impl Fn(&str) -> bool,
) {
    if ranked.len() <= limit {
        return;
    }
    let mut reserved_slots = ranked
        .iter()
        .filter(|(id, _)| reserved(*id))
        .count()
        .min(limit);
    let mut open_slots = limit - reserved_slots;
    ranked.retain(|(id, _)| {
        let slots = if reserved(*id) {
            &mut reserved_slots
        } else {
            &mut open_slots
        };
        if *slots == 0 {
            return false;
        }
        *slots -= 1;
        true
    });
}
