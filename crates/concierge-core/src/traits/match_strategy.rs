use crate::catalog::Catalog;
use crate::models::MatchResult;

/// Maps an utterance to at most one intent of a catalog.
///
/// Implementations are immutable after construction and keep any scratch
/// state local to the call, so one instance can serve concurrent turns.
pub trait IMatchStrategy: Send + Sync {
    /// Short stable name, used in logs and match results.
    fn name(&self) -> &'static str;

    /// Classify `utterance` against `catalog`.
    fn classify<'c>(&self, utterance: &str, catalog: &'c Catalog) -> MatchResult<'c>;
}
