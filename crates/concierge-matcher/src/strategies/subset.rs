use concierge_core::constants::SUBSET_MATCH_SCORE;
use concierge_core::{Catalog, IMatchStrategy, MatchResult};

use crate::tokenizer;

/// Matches when every word of a pattern appears in the utterance.
///
/// Scans in catalog order, then pattern order, and stops at the first hit:
/// the earliest qualifying intent wins, not the most specific one. Patterns
/// with no word tokens are skipped since the empty set is a subset of anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsetStrategy;

impl SubsetStrategy {
    pub const NAME: &'static str = "subset";

    pub fn new() -> Self {
        Self
    }
}

impl IMatchStrategy for SubsetStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classify<'c>(&self, utterance: &str, catalog: &'c Catalog) -> MatchResult<'c> {
        let input = tokenizer::word_set(utterance);
        if input.is_empty() {
            return MatchResult::no_match(0.0, Self::NAME);
        }

        for intent in catalog.intents() {
            for pattern in intent.patterns() {
                let pattern_words = tokenizer::word_set(pattern);
                if !pattern_words.is_empty() && pattern_words.is_subset(&input) {
                    return MatchResult::matched(intent, SUBSET_MATCH_SCORE, Self::NAME);
                }
            }
        }
        MatchResult::no_match(0.0, Self::NAME)
    }
}
