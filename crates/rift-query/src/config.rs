//! Configuration for the query engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default similarity a token needs to fuzzy-match a champion name.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Maps a word in the question to a build variant label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantKeyword {
    /// The word to look for. `-`, `_` and spaces inside it are
    /// interchangeable, so `"on-hit"` also matches "on hit" and "onhit".
    pub keyword: String,
    /// The variant label it selects in the knowledge base.
    pub label: String,
}

impl VariantKeyword {
    /// Create a keyword entry.
    pub fn new(keyword: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            label: label.into(),
        }
    }
}

/// Tunables for entity resolution and intent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Minimum similarity (0.0-1.0) for a token to fuzzy-match a name.
    pub fuzzy_threshold: f64,
    /// Words that refer back to the last champion discussed.
    pub pronouns: Vec<String>,
    /// Build variant keywords, scanned in order. Replaces the defaults
    /// entirely when set in a config file.
    pub variant_keywords: Vec<VariantKeyword>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            pronouns: vec!["it".to_string()],
            variant_keywords: default_variant_keywords(),
        }
    }
}

fn default_variant_keywords() -> Vec<VariantKeyword> {
    [
        ("ap", "ap"),
        ("ad", "ad"),
        ("on-hit", "on_hit"),
        ("jungle", "jungle"),
        ("jungler", "jungle"),
        ("jug", "jungle"),
        ("jg", "jungle"),
        ("support", "support"),
        ("supp", "support"),
        ("adc", "adc"),
        ("bot", "adc"),
        ("tank", "tank"),
        ("crit", "crit"),
        ("lethality", "lethality"),
    ]
    .into_iter()
    .map(|(keyword, label)| VariantKeyword::new(keyword, label))
    .collect()
}

impl QueryConfig {
    /// Parse and validate a TOML config. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::InvalidThreshold(self.fuzzy_threshold));
        }
        let blank = self
            .variant_keywords
            .iter()
            .any(|v| v.keyword.trim().is_empty() || v.label.trim().is_empty());
        if blank {
            return Err(ConfigError::EmptyVariantKeyword);
        }
        Ok(())
    }

    /// Set the fuzzy threshold (clamped to 0.0-1.0).
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = if threshold.is_nan() {
            DEFAULT_FUZZY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Replace the pronoun list.
    pub fn with_pronouns<I, S>(mut self, pronouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pronouns = pronouns.into_iter().map(Into::into).collect();
        self
    }

    /// Append a variant keyword after the existing ones.
    pub fn with_variant_keyword(mut self, keyword: &str, label: &str) -> Self {
        self.variant_keywords.push(VariantKeyword::new(keyword, label));
        self
    }
}

/// Read a TOML config file.
pub fn load_config(path: &Path) -> ConfigResult<QueryConfig> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = QueryConfig::from_toml_str(&source)?;
    tracing::debug!(path = %path.display(), "loaded query config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QueryConfig::default();
        assert_eq!(cfg.fuzzy_threshold, 0.7);
        assert_eq!(cfg.pronouns, vec!["it"]);
        assert!(
            cfg.variant_keywords
                .iter()
                .any(|v| v.keyword == "jug" && v.label == "jungle")
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = QueryConfig::default()
            .with_fuzzy_threshold(0.85)
            .with_pronouns(["it", "him"])
            .with_variant_keyword("poke", "poke");
        assert_eq!(cfg.fuzzy_threshold, 0.85);
        assert_eq!(cfg.pronouns, vec!["it", "him"]);
        assert_eq!(cfg.variant_keywords.last().unwrap().label, "poke");
    }

    #[test]
    fn threshold_clamped() {
        assert_eq!(QueryConfig::default().with_fuzzy_threshold(-1.0).fuzzy_threshold, 0.0);
        assert_eq!(QueryConfig::default().with_fuzzy_threshold(3.0).fuzzy_threshold, 1.0);
        assert_eq!(
            QueryConfig::default().with_fuzzy_threshold(f64::NAN).fuzzy_threshold,
            DEFAULT_FUZZY_THRESHOLD
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = QueryConfig::from_toml_str("fuzzy_threshold = 0.8\n").unwrap();
        assert_eq!(cfg.fuzzy_threshold, 0.8);
        assert_eq!(cfg.pronouns, vec!["it"]);
        assert_eq!(cfg.variant_keywords, default_variant_keywords());
    }

    #[test]
    fn toml_replaces_keyword_table() {
        let cfg = QueryConfig::from_toml_str(
            r#"
            [[variant_keywords]]
            keyword = "poke"
            label = "poke"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.variant_keywords, vec![VariantKeyword::new("poke", "poke")]);
    }

    #[test]
    fn toml_rejects_out_of_range_threshold() {
        let err = QueryConfig::from_toml_str("fuzzy_threshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(t) if t == 1.5));
    }

    #[test]
    fn toml_rejects_blank_keyword() {
        let err = QueryConfig::from_toml_str(
            r#"
            [[variant_keywords]]
            keyword = " "
            label = "ap"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVariantKeyword));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rift.toml");
        std::fs::write(&path, "pronouns = [\"it\", \"them\"]\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.pronouns, vec!["it", "them"]);

        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
