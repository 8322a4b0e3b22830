//! # concierge-matcher
//!
//! The intent-matching engine. A cheap deterministic pass first, then one
//! configurable similarity fallback, then response selection.
//!
//! ## Architecture
//!
//! ```text
//! IntentMatcher
//! ├── SubsetStrategy          (pattern tokens ⊆ utterance tokens, first hit wins)
//! ├── fallback (configurable)
//! │   ├── EditSimilarityStrategy (normalized indel ratio, best pattern)
//! │   └── CosineStrategy         (TF-IDF index built once per catalog)
//! └── turn() → ResponseSelector  (seedable uniform choice, fallback text on miss)
//! ```

pub mod algorithms;
pub mod engine;
pub mod response;
pub mod strategies;
pub mod tokenizer;

pub use algorithms::tfidf::TfIdfIndex;
pub use engine::IntentMatcher;
pub use response::ResponseSelector;
pub use strategies::{
    classify, CosineStrategy, EditSimilarityStrategy, StrategyKind, SubsetStrategy,
};
