//! Top-level Concierge configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, FallbackPolicy, MatcherConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CONCIERGE_*`)
/// 3. Config file (`concierge.toml` or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConciergeConfig {
    pub catalog: CatalogConfig,
    pub matcher: MatcherConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<String>,
    pub fallback: Option<FallbackPolicy>,
    pub edit_threshold: Option<f64>,
    pub cosine_threshold: Option<f64>,
}

impl ConciergeConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_path` is optional; when given it must exist.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            catalog = %config.catalog.path,
            fallback = %config.matcher.fallback,
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML config file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConciergeConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("matcher.edit_threshold", config.matcher.edit_threshold),
            ("matcher.cosine_threshold", config.matcher.cosine_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.catalog.path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored so a stray variable cannot block startup.
    fn apply_env_overrides(config: &mut ConciergeConfig) {
        if let Ok(val) = std::env::var("CONCIERGE_CATALOG") {
            config.catalog.path = val;
        }
        if let Ok(val) = std::env::var("CONCIERGE_FALLBACK") {
            match val.parse::<FallbackPolicy>() {
                Ok(v) => config.matcher.fallback = v,
                Err(e) => tracing::warn!("ignoring CONCIERGE_FALLBACK: {e}"),
            }
        }
        if let Ok(val) = std::env::var("CONCIERGE_EDIT_THRESHOLD") {
            match val.parse::<f64>() {
                Ok(v) => config.matcher.edit_threshold = v,
                Err(e) => tracing::warn!("ignoring CONCIERGE_EDIT_THRESHOLD={val:?}: {e}"),
            }
        }
        if let Ok(val) = std::env::var("CONCIERGE_COSINE_THRESHOLD") {
            match val.parse::<f64>() {
                Ok(v) => config.matcher.cosine_threshold = v,
                Err(e) => tracing::warn!("ignoring CONCIERGE_COSINE_THRESHOLD={val:?}: {e}"),
            }
        }
        if let Ok(val) = std::env::var("CONCIERGE_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ConciergeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.catalog_path {
            config.catalog.path = v.clone();
        }
        if let Some(v) = cli.fallback {
            config.matcher.fallback = v;
        }
        if let Some(v) = cli.edit_threshold {
            config.matcher.edit_threshold = v;
        }
        if let Some(v) = cli.cosine_threshold {
            config.matcher.cosine_threshold = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
