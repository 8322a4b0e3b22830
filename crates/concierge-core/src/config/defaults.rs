// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: &str = "intents.json";

// --- Matcher ---
pub const DEFAULT_EDIT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_COSINE_THRESHOLD: f64 = 0.6;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
