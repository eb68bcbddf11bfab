//! Configuration loading: JSON settings file, environment overrides, defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3010;
pub const DEFAULT_CONFIG_PATH: &str = "config/lahja.json";
pub const DEFAULT_ENGLISH_MATCH_WEIGHT: f64 = 0.4;
pub const DEFAULT_AMERICAN_BASELINE: f64 = 0.3;
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 3000;

/// Tiered weight table used by the Arabic scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightingPolicy {
    /// Weight by marker position only: 0.6 / 0.4 / 0.3.
    #[default]
    PositionTiered,
    /// Phrases (space or question mark) score 0.8; words use 0.6 / 0.4 / 0.3.
    PhraseAwareTiered,
}

impl WeightingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PositionTiered => "position-tiered",
            Self::PhraseAwareTiered => "phrase-aware-tiered",
        }
    }
}

impl fmt::Display for WeightingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "position-tiered" => Ok(Self::PositionTiered),
            "phrase-aware-tiered" => Ok(Self::PhraseAwareTiered),
            other => Err(Error::Config(format!(
                "unknown weighting policy '{}' (expected position-tiered or phrase-aware-tiered)",
                other
            ))),
        }
    }
}

/// Settings for the lexical scoring pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconSettings {
    #[serde(default)]
    pub weighting: WeightingPolicy,
    /// Weight of every English marker match.
    #[serde(default = "default_english_match_weight")]
    pub english_match_weight: f64,
    /// Starting score per Arabic dialect identifier.
    #[serde(default)]
    pub arabic_baselines: BTreeMap<String, f64>,
    /// Starting score per English dialect identifier.
    #[serde(default = "default_english_baselines")]
    pub english_baselines: BTreeMap<String, f64>,
}

fn default_english_match_weight() -> f64 {
    DEFAULT_ENGLISH_MATCH_WEIGHT
}

fn default_english_baselines() -> BTreeMap<String, f64> {
    BTreeMap::from([("american".to_string(), DEFAULT_AMERICAN_BASELINE)])
}

impl Default for LexiconSettings {
    fn default() -> Self {
        Self {
            weighting: WeightingPolicy::default(),
            english_match_weight: DEFAULT_ENGLISH_MATCH_WEIGHT,
            arabic_baselines: BTreeMap::new(),
            english_baselines: default_english_baselines(),
        }
    }
}

/// Settings for the remote classifier adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Classification endpoint. `None` disables the remote classifier.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_MS
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
        }
    }
}

/// Top-level Lahja configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LahjaConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub lexicon: LexiconSettings,
    #[serde(default)]
    pub remote: RemoteSettings,
    /// Path the configuration was loaded from.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for LahjaConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            lexicon: LexiconSettings::default(),
            remote: RemoteSettings::default(),
            config_path: PathBuf::new(),
        }
    }
}

impl LahjaConfig {
    /// Resolve the settings file path from `LAHJA_CONFIG`.
    pub fn resolve_path() -> PathBuf {
        std::env::var("LAHJA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from file, falling back to defaults, then apply env overrides.
    pub fn from_env(config_path: &Path) -> Result<Self> {
        let mut config = Self::load(config_path);
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file only. A missing or unparsable file yields defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(config_path) {
            Ok(raw) => match serde_json::from_str::<LahjaConfig>(&raw) {
                Ok(c) => {
                    info!("Loaded configuration from {}", config_path.display());
                    c
                }
                Err(e) => {
                    warn!(
                        "Ignoring unparsable config {}: {}",
                        config_path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };
        config.config_path = config_path.to_path_buf();
        config
    }

    /// Apply `PORT`, `LAHJA_WEIGHTING`, `LAHJA_REMOTE_URL`, `LAHJA_REMOTE_TIMEOUT_MS`.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Ok(policy) = std::env::var("LAHJA_WEIGHTING") {
            self.lexicon.weighting = policy.parse()?;
        }
        if let Ok(url) = std::env::var("LAHJA_REMOTE_URL") {
            let url = url.trim();
            self.remote.endpoint = if url.is_empty() {
                None
            } else {
                Some(url.to_string())
            };
        }
        if let Ok(ms) = std::env::var("LAHJA_REMOTE_TIMEOUT_MS") {
            self.remote.timeout_ms = ms
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid LAHJA_REMOTE_TIMEOUT_MS: {}", ms)))?;
        }
        Ok(())
    }

    /// Reject values the scoring pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        let lexicon = &self.lexicon;
        if !lexicon.english_match_weight.is_finite() || lexicon.english_match_weight <= 0.0 {
            return Err(Error::Config(format!(
                "english_match_weight must be positive, got {}",
                lexicon.english_match_weight
            )));
        }
        for (id, baseline) in lexicon
            .arabic_baselines
            .iter()
            .chain(lexicon.english_baselines.iter())
        {
            if !baseline.is_finite() || *baseline < 0.0 {
                return Err(Error::Config(format!(
                    "baseline for '{}' must be non-negative, got {}",
                    id, baseline
                )));
            }
        }
        if self.remote.timeout_ms == 0 {
            return Err(Error::Config("remote timeout_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Save config to disk as pretty JSON.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved configuration to {}", self.config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LahjaConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.lexicon.weighting, WeightingPolicy::PositionTiered);
        assert_eq!(config.lexicon.english_baselines.get("american"), Some(&0.3));
        assert!(config.lexicon.arabic_baselines.is_empty());
        assert!(config.remote.endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weighting_policy_parse() {
        assert_eq!(
            "position-tiered".parse::<WeightingPolicy>().unwrap(),
            WeightingPolicy::PositionTiered
        );
        assert_eq!(
            " Phrase-Aware-Tiered ".parse::<WeightingPolicy>().unwrap(),
            WeightingPolicy::PhraseAwareTiered
        );
        assert!(matches!(
            "random".parse::<WeightingPolicy>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_weighting_policy_serde() {
        let json = serde_json::to_string(&WeightingPolicy::PhraseAwareTiered).unwrap();
        assert_eq!(json, "\"phrase-aware-tiered\"");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let config = LahjaConfig::load(&path);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lahja.json");
        std::fs::write(
            &path,
            r#"{"lexicon": {"weighting": "phrase-aware-tiered"}, "remote": {"endpoint": "http://ml:8080/classify"}}"#,
        )
        .unwrap();

        let config = LahjaConfig::load(&path);
        assert_eq!(config.lexicon.weighting, WeightingPolicy::PhraseAwareTiered);
        assert_eq!(config.lexicon.english_match_weight, 0.4);
        assert_eq!(config.lexicon.english_baselines.get("american"), Some(&0.3));
        assert_eq!(
            config.remote.endpoint.as_deref(),
            Some("http://ml:8080/classify")
        );
        assert_eq!(config.remote.timeout_ms, DEFAULT_REMOTE_TIMEOUT_MS);
    }

    #[test]
    fn test_load_garbage_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lahja.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(LahjaConfig::load(&path).port, DEFAULT_PORT);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lahja.json");
        let mut config = LahjaConfig::load(&path);
        config.port = 4000;
        config.lexicon.weighting = WeightingPolicy::PhraseAwareTiered;
        config.save().unwrap();

        let reloaded = LahjaConfig::load(&path);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_validate_rejects_negative_baseline() {
        let mut config = LahjaConfig::default();
        config
            .lexicon
            .arabic_baselines
            .insert("egyptian".into(), -0.1);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_weight_and_timeout() {
        let mut config = LahjaConfig::default();
        config.lexicon.english_match_weight = 0.0;
        assert!(config.validate().is_err());

        let mut config = LahjaConfig::default();
        config.remote.timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
