//! Test fixture loader for Concierge catalogs.
//!
//! Locates the workspace `test-fixtures/` folder from any crate and loads the
//! catalog files under `catalogs/`.

use std::path::PathBuf;

use concierge_core::Catalog;

/// The hotel concierge catalog used across integration tests.
pub const HOTEL_CATALOG: &str = "catalogs/hotel_intents.json";

/// Catalog whose intents have 1, 5 and 2 patterns respectively.
pub const UNEQUAL_PATTERNS_CATALOG: &str = "catalogs/unequal_patterns.json";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Skip the crate of the same name; we want the data folder, not this crate.
    while !path.join("test-fixtures").join("catalogs").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a fixture catalog through the real loader.
///
/// # Panics
/// Panics if the catalog is malformed.
pub fn load_catalog(relative_path: &str) -> Catalog {
    let path = fixture_path(relative_path);
    Catalog::load(&path)
        .unwrap_or_else(|e| panic!("Failed to load catalog {}: {}", path.display(), e))
}

/// The hotel concierge catalog.
pub fn hotel_catalog() -> Catalog {
    load_catalog(HOTEL_CATALOG)
}
