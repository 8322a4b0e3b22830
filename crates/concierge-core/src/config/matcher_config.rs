//! Matcher policy: which similarity strategy backs up the subset pass, and
//! the threshold each one must clear.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Strategy consulted when the subset pass finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Normalized edit-similarity against every pattern.
    #[default]
    EditSimilarity,
    /// TF-IDF cosine similarity over a prebuilt pattern index.
    Cosine,
    /// Subset matching only.
    None,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EditSimilarity => "edit_similarity",
            Self::Cosine => "cosine",
            Self::None => "none",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit" | "edit_similarity" | "edit-similarity" => Ok(Self::EditSimilarity),
            "cosine" | "tfidf" | "tf-idf" => Ok(Self::Cosine),
            "none" | "off" => Ok(Self::None),
            other => Err(format!(
                "unknown fallback policy '{other}' (expected edit_similarity, cosine, or none)"
            )),
        }
    }
}

/// Matcher subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub fallback: FallbackPolicy,
    /// Minimum edit-similarity ratio for a fallback match.
    pub edit_threshold: f64,
    /// Minimum cosine similarity for a fallback match.
    pub cosine_threshold: f64,
}

impl MatcherConfig {
    /// Threshold that applies to the configured fallback, if any.
    pub fn fallback_threshold(&self) -> Option<f64> {
        match self.fallback {
            FallbackPolicy::EditSimilarity => Some(self.edit_threshold),
            FallbackPolicy::Cosine => Some(self.cosine_threshold),
            FallbackPolicy::None => None,
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default(),
            edit_threshold: defaults::DEFAULT_EDIT_THRESHOLD,
            cosine_threshold: defaults::DEFAULT_COSINE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_aliases() {
        assert_eq!("edit".parse::<FallbackPolicy>(), Ok(FallbackPolicy::EditSimilarity));
        assert_eq!("TF-IDF".parse::<FallbackPolicy>(), Ok(FallbackPolicy::Cosine));
        assert_eq!(" none ".parse::<FallbackPolicy>(), Ok(FallbackPolicy::None));
        assert!("bm25".parse::<FallbackPolicy>().is_err());
    }

    #[test]
    fn fallback_threshold_follows_policy() {
        let mut cfg = MatcherConfig {
            edit_threshold: 0.7,
            cosine_threshold: 0.4,
            ..MatcherConfig::default()
        };
        assert_eq!(cfg.fallback_threshold(), Some(0.7));
        cfg.fallback = FallbackPolicy::Cosine;
        assert_eq!(cfg.fallback_threshold(), Some(0.4));
        cfg.fallback = FallbackPolicy::None;
        assert_eq!(cfg.fallback_threshold(), None);
    }
}
