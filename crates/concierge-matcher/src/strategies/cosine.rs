use concierge_core::config::defaults::DEFAULT_COSINE_THRESHOLD;
use concierge_core::errors::CatalogError;
use concierge_core::{Catalog, IMatchStrategy, MatchResult};
use tracing::warn;

use crate::algorithms::tfidf::TfIdfIndex;

/// TF-IDF cosine similarity against a prebuilt pattern index.
///
/// The index is fitted once at construction. A query is matched to the
/// arg-max pattern and attributed to its owner through the index's
/// flat-index table.
#[derive(Debug, Clone)]
pub struct CosineStrategy {
    index: TfIdfIndex,
    threshold: f64,
}

impl CosineStrategy {
    pub const NAME: &'static str = "cosine";

    /// Build the index for `catalog`. Fails fast on an empty vocabulary.
    pub fn build(catalog: &Catalog, threshold: f64) -> Result<Self, CatalogError> {
        Ok(Self::with_index(TfIdfIndex::build(catalog)?, threshold))
    }

    pub fn with_index(index: TfIdfIndex, threshold: f64) -> Self {
        Self { index, threshold }
    }

    /// Build with the default threshold.
    pub fn build_default(catalog: &Catalog) -> Result<Self, CatalogError> {
        Self::build(catalog, DEFAULT_COSINE_THRESHOLD)
    }

    pub fn index(&self) -> &TfIdfIndex {
        &self.index
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl IMatchStrategy for CosineStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classify<'c>(&self, utterance: &str, catalog: &'c Catalog) -> MatchResult<'c> {
        if !self.index.is_built_from(catalog) {
            warn!(
                indexed_patterns = self.index.pattern_count(),
                catalog_patterns = catalog.pattern_count(),
                "cosine index was built from a different catalog; refusing to match"
            );
            return MatchResult::no_match(0.0, Self::NAME);
        }

        let Some(hit) = self.index.best_match(utterance) else {
            return MatchResult::no_match(0.0, Self::NAME);
        };
        if hit.score < self.threshold {
            return MatchResult::no_match(hit.score, Self::NAME);
        }
        match catalog.get(hit.intent) {
            Some(intent) => MatchResult::matched(intent, hit.score, Self::NAME),
            None => MatchResult::no_match(hit.score, Self::NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use concierge_core::IntentRecord;

    use super::*;

    #[test]
    fn attributes_match_through_owner_table() {
        // Intents have 1, 3 and 1 patterns; flat index 4 belongs to "laundry".
        let c = Catalog::from_records(vec![
            IntentRecord::new("spa", ["spa appointment"], ["a"]),
            IntentRecord::new("parking", ["valet parking", "garage fees", "car charging"], ["b"]),
            IntentRecord::new("laundry", ["laundry service"], ["c"]),
        ])
        .unwrap();
        let strategy = CosineStrategy::build(&c, 0.6).unwrap();
        let r = strategy.classify("laundry service please", &c);
        assert_eq!(r.intent_id(), Some("laundry"));
    }

    #[test]
    fn unrelated_text_is_a_miss() {
        let c = Catalog::from_records(vec![IntentRecord::new("spa", ["spa appointment"], ["a"])])
            .unwrap();
        let strategy = CosineStrategy::build_default(&c).unwrap();
        let r = strategy.classify("purple elephant", &c);
        assert!(!r.is_match());
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn foreign_catalog_is_refused() {
        let built_from =
            Catalog::from_records(vec![IntentRecord::new("spa", ["spa"], ["a"])]).unwrap();
        let other =
            Catalog::from_records(vec![IntentRecord::new("gym", ["spa"], ["b"])]).unwrap();
        let strategy = CosineStrategy::build(&built_from, 0.1).unwrap();
        assert!(strategy.classify("spa", &built_from).is_match());
        assert!(!strategy.classify("spa", &other).is_match());
    }
}
