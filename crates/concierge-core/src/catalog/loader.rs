use std::path::Path;

use tracing::info;

use super::record::{TomlDocument, WrappedDocument};
use super::{Catalog, IntentRecord};
use crate::errors::CatalogError;

impl Catalog {
    /// Parse a JSON catalog: a bare array of records or `{"intents": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_records(parse_json(json, "<string>")?)
    }

    /// Parse a TOML catalog with an `[[intents]]` array of tables.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        Self::from_records(parse_toml(toml_str, "<string>")?)
    }

    /// Load a catalog from a local `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let records = match extension.as_deref() {
            Some("json") => parse_json(&content, &shown)?,
            Some("toml") => parse_toml(&content, &shown)?,
            _ => return Err(CatalogError::UnsupportedFormat { path: shown }),
        };

        let catalog = Self::from_records(records)?;
        info!(
            path = %shown,
            intents = catalog.len(),
            patterns = catalog.pattern_count(),
            "intent catalog loaded"
        );
        Ok(catalog)
    }
}

/// Load a catalog from a local file. See [`Catalog::load`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    Catalog::load(path.as_ref())
}

/// Dispatch on the leading token rather than trying both shapes, so a bad
/// field surfaces serde_json's line and column.
fn parse_json(json: &str, path: &str) -> Result<Vec<IntentRecord>, CatalogError> {
    let parsed = match json.trim_start().chars().next() {
        Some('{') => serde_json::from_str::<WrappedDocument>(json).map(|doc| doc.intents),
        _ => serde_json::from_str::<Vec<IntentRecord>>(json),
    };
    parsed.map_err(|e| CatalogError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn parse_toml(toml_str: &str, path: &str) -> Result<Vec<IntentRecord>, CatalogError> {
    toml::from_str::<TomlDocument>(toml_str)
        .map(|doc| doc.intents)
        .map_err(|e| CatalogError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
}
