use super::{CatalogError, ConfigError};

/// Top-level error for the Concierge workspace.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ConciergeResult<T> = Result<T, ConciergeError>;
