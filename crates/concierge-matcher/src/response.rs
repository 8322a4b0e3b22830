//! Response selection with an injectable random source.

use concierge_core::constants::FALLBACK_RESPONSE;
use concierge_core::Intent;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks one of a matched intent's responses uniformly at random.
///
/// A miss always yields [`FALLBACK_RESPONSE`]. Owned by the caller (one per
/// session or per thread) so the matcher itself holds no mutable state.
#[derive(Debug, Clone)]
pub struct ResponseSelector<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl ResponseSelector<ChaCha8Rng> {
    /// Deterministic selector for tests and reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl Default for ResponseSelector<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> ResponseSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Response text for a match result's intent.
    pub fn select_response(&mut self, intent: Option<&Intent>) -> String {
        intent
            .and_then(|i| i.responses().choose(&mut self.rng))
            .cloned()
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string())
    }
}
