/// Catalog loading and indexing errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog record {index}: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("catalog parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("catalog contains no intents")]
    Empty,

    #[error("failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("unsupported catalog format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: String },

    #[error("vector index has an empty vocabulary: no pattern yields a term")]
    EmptyVocabulary,
}

impl CatalogError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            index,
            reason: reason.into(),
        }
    }
}
