//! Language-scoped keyword dictionary with a parallel metadata table.

use std::collections::HashMap;

use lahja_core::{Error, Result};
use once_cell::sync::Lazy;

use crate::dictionaries::{arabic, english};
use crate::types::{DialectInfo, Language};

/// A dialect identifier and its ordered marker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectEntry {
    pub id: &'static str,
    /// Earlier markers are more distinctive.
    pub markers: &'static [&'static str],
}

/// Immutable marker dictionary for one language.
#[derive(Debug)]
pub struct Dictionary {
    language: Language,
    entries: Vec<DialectEntry>,
    index: HashMap<&'static str, usize>,
    info: HashMap<&'static str, DialectInfo>,
    case_insensitive: bool,
}

static ARABIC: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(Language::Arabic, arabic::MARKERS, arabic::INFO, false)
        .expect("built-in Arabic dictionary is well-formed")
});

static ENGLISH: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(Language::English, english::MARKERS, english::INFO, true)
        .expect("built-in English dictionary is well-formed")
});

impl Dictionary {
    /// Build a dictionary from marker and metadata tables.
    ///
    /// Identifiers must be unique and markers non-empty. Metadata may omit
    /// identifiers; lookups then return `None`.
    pub fn new(
        language: Language,
        markers: &[(&'static str, &'static [&'static str])],
        info: &[(&'static str, DialectInfo)],
        case_insensitive: bool,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(markers.len());
        let mut index = HashMap::with_capacity(markers.len());

        for &(id, list) in markers {
            if index.insert(id, entries.len()).is_some() {
                return Err(Error::InvariantViolation(format!(
                    "duplicate dialect '{}' in {} dictionary",
                    id, language
                )));
            }
            if let Some(pos) = list.iter().position(|m| m.trim().is_empty()) {
                return Err(Error::InvariantViolation(format!(
                    "empty marker at index {} for '{}' in {} dictionary",
                    pos, id, language
                )));
            }
            entries.push(DialectEntry { id, markers: list });
        }

        let info = info.iter().map(|(id, i)| (*id, i.clone())).collect();

        Ok(Self {
            language,
            entries,
            index,
            info,
            case_insensitive,
        })
    }

    /// Built-in Arabic dictionary.
    pub fn arabic() -> &'static Dictionary {
        &ARABIC
    }

    /// Built-in English dictionary.
    pub fn english() -> &'static Dictionary {
        &ENGLISH
    }

    pub fn for_language(language: Language) -> &'static Dictionary {
        match language {
            Language::Arabic => Self::arabic(),
            Language::English => Self::english(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether marker matching folds case.
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn markers(&self, id: &str) -> Option<&'static [&'static str]> {
        self.index.get(id).map(|&i| self.entries[i].markers)
    }

    pub fn info(&self, id: &str) -> Option<&DialectInfo> {
        self.info.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in dictionary order.
    pub fn entries(&self) -> &[DialectEntry] {
        &self.entries
    }

    /// Identifiers in dictionary order with their metadata, if any.
    pub fn dialects(&self) -> impl Iterator<Item = (&'static str, Option<&DialectInfo>)> + '_ {
        self.entries.iter().map(|e| (e.id, self.info.get(e.id)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
