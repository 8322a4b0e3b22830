//! IntentMatcher: subset pass first, then the configured similarity fallback.

use concierge_core::config::{FallbackPolicy, MatcherConfig};
use concierge_core::constants::FALLBACK_RESPONSE;
use concierge_core::errors::CatalogError;
use concierge_core::{Catalog, IMatchStrategy, MatchResult, TerminationSignal, TurnReply};
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::response::ResponseSelector;
use crate::strategies::{CosineStrategy, EditSimilarityStrategy, SubsetStrategy};

/// The matching engine for one catalog.
///
/// Immutable after construction and `Send + Sync`; share it across sessions
/// and give each session its own [`ResponseSelector`].
pub struct IntentMatcher<'c> {
    catalog: &'c Catalog,
    primary: Box<dyn IMatchStrategy>,
    fallback: Option<Box<dyn IMatchStrategy>>,
}

impl<'c> IntentMatcher<'c> {
    /// Subset matching backed by the fallback named in `config`.
    ///
    /// The cosine fallback builds its TF-IDF index here, so an unusable
    /// catalog fails at startup rather than on the first query.
    pub fn new(catalog: &'c Catalog, config: &MatcherConfig) -> Result<Self, CatalogError> {
        let fallback: Option<Box<dyn IMatchStrategy>> = match config.fallback {
            FallbackPolicy::EditSimilarity => {
                Some(Box::new(EditSimilarityStrategy::new(config.edit_threshold)))
            }
            FallbackPolicy::Cosine => Some(Box::new(CosineStrategy::build(
                catalog,
                config.cosine_threshold,
            )?)),
            FallbackPolicy::None => None,
        };

        info!(
            intents = catalog.len(),
            fallback = %config.fallback,
            threshold = ?config.fallback_threshold(),
            "intent matcher ready"
        );

        Ok(Self::with_strategies(
            catalog,
            Box::new(SubsetStrategy),
            fallback,
        ))
    }

    /// Compose arbitrary strategies.
    pub fn with_strategies(
        catalog: &'c Catalog,
        primary: Box<dyn IMatchStrategy>,
        fallback: Option<Box<dyn IMatchStrategy>>,
    ) -> Self {
        Self {
            catalog,
            primary,
            fallback,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Name of the fallback strategy, if one is configured.
    pub fn fallback_name(&self) -> Option<&'static str> {
        self.fallback.as_ref().map(|f| f.name())
    }

    /// Classify one utterance. A miss is a value, not an error.
    pub fn classify(&self, utterance: &str) -> MatchResult<'c> {
        let primary = self.primary.classify(utterance, self.catalog);
        let result = match (&self.fallback, primary.is_match()) {
            (Some(fallback), false) => fallback.classify(utterance, self.catalog),
            _ => primary,
        };

        debug!(
            strategy = result.strategy,
            intent = result.intent_id().unwrap_or("-"),
            score = result.score,
            "classified utterance"
        );
        result
    }

    /// One user turn: classify, pick a response, and signal termination when
    /// the matched intent is terminal.
    #[instrument(level = "debug", skip_all, fields(len = utterance.len()))]
    pub fn turn<R: Rng>(&self, utterance: &str, selector: &mut ResponseSelector<R>) -> TurnReply {
        if utterance.trim().is_empty() {
            return TurnReply {
                text: FALLBACK_RESPONSE.to_string(),
                intent: None,
                score: 0.0,
                signal: TerminationSignal::Continue,
            };
        }

        let result = self.classify(utterance);
        TurnReply {
            text: selector.select_response(result.intent),
            intent: result.intent.map(|i| i.id().clone()),
            score: result.score,
            signal: TerminationSignal::for_intent(result.intent),
        }
    }
}
