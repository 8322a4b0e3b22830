//! # concierge-core
//!
//! Foundation crate for the Concierge responder.
//! Defines the intent catalog, match results, the strategy traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{load_catalog, Catalog, Intent, IntentId, IntentRecord};
pub use config::ConciergeConfig;
pub use errors::{ConciergeError, ConciergeResult};
pub use models::{MatchResult, TerminationSignal, TurnReply};
pub use traits::{IMatchStrategy, ISimilarity};
