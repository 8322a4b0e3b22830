//! Interchangeable matching strategies behind `IMatchStrategy`.

pub mod cosine;
pub mod edit_similarity;
pub mod subset;

pub use cosine::CosineStrategy;
pub use edit_similarity::EditSimilarityStrategy;
pub use subset::SubsetStrategy;

use concierge_core::errors::CatalogError;
use concierge_core::{Catalog, IMatchStrategy, MatchResult};

/// Selects a single strategy for [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Subset,
    EditSimilarity,
    Cosine,
}

/// Classify `text` with exactly one strategy.
///
/// `threshold` applies to the similarity strategies; a subset hit always
/// scores 1.0. The cosine variant fits a throwaway index, so prefer
/// [`CosineStrategy::build`] when classifying more than once.
pub fn classify<'c>(
    text: &str,
    catalog: &'c Catalog,
    strategy: StrategyKind,
    threshold: f64,
) -> Result<MatchResult<'c>, CatalogError> {
    Ok(match strategy {
        StrategyKind::Subset => SubsetStrategy.classify(text, catalog),
        StrategyKind::EditSimilarity => EditSimilarityStrategy::new(threshold).classify(text, catalog),
        StrategyKind::Cosine => CosineStrategy::build(catalog, threshold)?.classify(text, catalog),
    })
}
