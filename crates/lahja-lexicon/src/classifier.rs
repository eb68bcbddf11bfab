//! Lexical classifier: one scorer + result builder pipeline per language.

use lahja_core::{LexiconSettings, Result, WeightingPolicy};
use tracing::{info, warn};

use crate::builder::ResultBuilder;
use crate::dictionary::Dictionary;
use crate::scorer::Scorer;
use crate::types::{ClassificationResult, Language, ScoreTable};
use crate::weighting::MatchWeight;

#[derive(Debug, Clone)]
struct Pipeline {
    dictionary: &'static Dictionary,
    scorer: Scorer,
    builder: ResultBuilder,
}

impl Pipeline {
    fn new(language: Language, scorer: Scorer) -> Result<Self> {
        let dictionary = Dictionary::for_language(language);
        for id in scorer.baselines().keys() {
            if !dictionary.contains(id) {
                warn!("Ignoring {} baseline for unknown dialect '{}'", language, id);
            }
        }
        Ok(Self {
            dictionary,
            scorer,
            builder: ResultBuilder::for_language(language)?,
        })
    }
}

/// Keyword-matching dialect classifier over the built-in dictionaries.
///
/// Stateless after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct LexicalClassifier {
    weighting: WeightingPolicy,
    arabic: Pipeline,
    english: Pipeline,
}

impl LexicalClassifier {
    pub fn new(settings: &LexiconSettings) -> Result<Self> {
        let arabic = Scorer::new(MatchWeight::Tiered(settings.weighting))
            .with_baselines(settings.arabic_baselines.clone());
        let english = Scorer::new(MatchWeight::Flat(settings.english_match_weight))
            .with_baselines(settings.english_baselines.clone());

        info!(
            "Lexical classifier ready: arabic weighting={}, english weight={}",
            settings.weighting, settings.english_match_weight
        );

        Ok(Self {
            weighting: settings.weighting,
            arabic: Pipeline::new(Language::Arabic, arabic)?,
            english: Pipeline::new(Language::English, english)?,
        })
    }

    fn pipeline(&self, language: Language) -> &Pipeline {
        match language {
            Language::Arabic => &self.arabic,
            Language::English => &self.english,
        }
    }

    /// Active tiered weighting policy for Arabic.
    pub fn weighting(&self) -> WeightingPolicy {
        self.weighting
    }

    pub fn dictionary(&self, language: Language) -> &'static Dictionary {
        self.pipeline(language).dictionary
    }

    /// Raw per-dialect scores, before result shaping.
    pub fn score(&self, text: &str, language: Language) -> Result<ScoreTable> {
        let pipeline = self.pipeline(language);
        pipeline.scorer.score(pipeline.dictionary, text)
    }

    /// Ranked dialect labels for `text`, highest confidence first.
    pub fn classify(&self, text: &str, language: Language) -> Result<Vec<ClassificationResult>> {
        let pipeline = self.pipeline(language);
        let table = pipeline.scorer.score(pipeline.dictionary, text)?;
        pipeline.builder.build(&table, pipeline.dictionary)
    }
}
