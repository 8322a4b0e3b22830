//! Startup: resolve configuration, then load the catalog it names.

use std::path::Path;

use concierge_core::config::{CliOverrides, ConciergeConfig};
use concierge_core::{load_catalog, Catalog, ConciergeResult};

/// Everything the chat loop needs before the first turn.
#[derive(Debug)]
pub struct Startup {
    pub config: ConciergeConfig,
    pub catalog: Catalog,
}

/// Resolve layered configuration and load the configured catalog.
///
/// A config failure short-circuits before any catalog file is touched.
pub fn prepare(config_path: Option<&Path>, overrides: &CliOverrides) -> ConciergeResult<Startup> {
    let config = ConciergeConfig::load(config_path, Some(overrides))?;
    let catalog = load_catalog(&config.catalog.path)?;
    Ok(Startup { config, catalog })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use concierge_core::config::FallbackPolicy;
    use concierge_core::errors::{CatalogError, ConfigError};
    use concierge_core::ConciergeError;
    use test_fixtures::{fixture_path, HOTEL_CATALOG};

    use super::*;

    fn overrides(catalog: &Path) -> CliOverrides {
        CliOverrides {
            catalog_path: Some(catalog.display().to_string()),
            ..CliOverrides::default()
        }
    }

    #[test]
    fn valid_catalog_and_config_start_up() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("concierge.toml");
        fs::write(&config_path, "[matcher]\nfallback = \"cosine\"\n").unwrap();

        let startup = prepare(Some(&config_path), &overrides(&fixture_path(HOTEL_CATALOG))).unwrap();
        assert_eq!(startup.config.matcher.fallback, FallbackPolicy::Cosine);
        assert_eq!(startup.catalog.len(), 9);
    }

    #[test]
    fn malformed_catalog_is_a_catalog_error() {
        let path = fixture_path("catalogs/malformed_missing_responses.json");
        let err = prepare(None, &overrides(&path)).unwrap_err();
        assert!(matches!(
            err,
            ConciergeError::Catalog(CatalogError::Malformed { index: 1, .. })
        ));
        assert!(err.to_string().starts_with("catalog error"), "{err}");
    }

    #[test]
    fn invalid_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("concierge.toml");
        fs::write(&config_path, "[matcher]\nedit_threshold = 1.5\n").unwrap();

        let err = prepare(Some(&config_path), &overrides(&fixture_path(HOTEL_CATALOG))).unwrap_err();
        assert!(matches!(
            err,
            ConciergeError::Config(ConfigError::ValidationFailed { .. })
        ));
    }
}
