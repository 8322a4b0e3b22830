//! Error handling for Concierge.
//! One error enum per subsystem, `thiserror` only, aggregated by `ConciergeError`.

pub mod catalog_error;
pub mod concierge_error;
pub mod config_error;

pub use catalog_error::CatalogError;
pub use concierge_error::{ConciergeError, ConciergeResult};
pub use config_error::ConfigError;
