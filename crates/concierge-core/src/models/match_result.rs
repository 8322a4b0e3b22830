use crate::catalog::Intent;

/// Outcome of classifying one utterance.
///
/// Borrows the matched intent from the catalog. A miss keeps the best score
/// seen so callers can log how close the utterance came.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'c> {
    pub intent: Option<&'c Intent>,
    /// Similarity in `[0, 1]`.
    pub score: f64,
    /// Name of the strategy that produced this result.
    pub strategy: &'static str,
}

impl<'c> MatchResult<'c> {
    pub fn matched(intent: &'c Intent, score: f64, strategy: &'static str) -> Self {
        Self {
            intent: Some(intent),
            score,
            strategy,
        }
    }

    pub fn no_match(best_score: f64, strategy: &'static str) -> Self {
        Self {
            intent: None,
            score: best_score,
            strategy,
        }
    }

    pub fn is_match(&self) -> bool {
        self.intent.is_some()
    }

    /// Id of the matched intent, if any.
    pub fn intent_id(&self) -> Option<&'c str> {
        self.intent.map(|i| i.id().as_str())
    }
}
