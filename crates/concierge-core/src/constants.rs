/// Concierge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply used whenever no intent clears its strategy's threshold.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I didn't understand that. Can you please rephrase?";

/// Score reported by the subset strategy on a hit.
pub const SUBSET_MATCH_SCORE: f64 = 1.0;

/// Prefix for ids synthesized for records without a `tag`.
pub const GENERATED_ID_PREFIX: &str = "intent_";
