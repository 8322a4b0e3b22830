//! Configuration system for Concierge.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod catalog_config;
pub mod concierge_config;
pub mod defaults;
pub mod matcher_config;
pub mod observability_config;

pub use catalog_config::CatalogConfig;
pub use concierge_config::{CliOverrides, ConciergeConfig};
pub use matcher_config::{FallbackPolicy, MatcherConfig};
pub use observability_config::ObservabilityConfig;
