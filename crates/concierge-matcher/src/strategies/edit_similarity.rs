use concierge_core::config::defaults::DEFAULT_EDIT_THRESHOLD;
use concierge_core::{Catalog, IMatchStrategy, ISimilarity, MatchResult};

use crate::algorithms::sequence_ratio::IndelRatio;

/// Scores the raw utterance against every pattern with a normalized
/// edit-similarity ratio and keeps the best.
///
/// The first pattern to reach a score keeps it; later equal scores do not
/// replace it. The best intent is returned only if it reaches `threshold`.
pub struct EditSimilarityStrategy {
    similarity: Box<dyn ISimilarity>,
    threshold: f64,
}

impl EditSimilarityStrategy {
    pub const NAME: &'static str = "edit_similarity";

    pub fn new(threshold: f64) -> Self {
        Self::with_similarity(Box::new(IndelRatio), threshold)
    }

    /// Use a different pairwise measure with the same best-pattern scan.
    pub fn with_similarity(similarity: Box<dyn ISimilarity>, threshold: f64) -> Self {
        Self {
            similarity,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for EditSimilarityStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_EDIT_THRESHOLD)
    }
}

impl IMatchStrategy for EditSimilarityStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classify<'c>(&self, utterance: &str, catalog: &'c Catalog) -> MatchResult<'c> {
        let mut best: Option<(usize, f64)> = None;
        for (intent, pattern) in catalog.patterns() {
            let score = self.similarity.similarity(utterance, pattern);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((intent, score));
            }
        }

        match best {
            Some((intent, score)) if score >= self.threshold => {
                match catalog.get(intent) {
                    Some(intent) => MatchResult::matched(intent, score, Self::NAME),
                    None => MatchResult::no_match(score, Self::NAME),
                }
            }
            Some((_, score)) => MatchResult::no_match(score, Self::NAME),
            None => MatchResult::no_match(0.0, Self::NAME),
        }
    }
}
