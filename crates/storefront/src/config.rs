//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CAKE_SHOP_DATA_DIR` - Directory backing local storage (default: `.cake-shop`)
//! - `CAKE_SHOP_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `CAKE_SHOP_MAX_IMAGE_BYTES` - Largest image file accepted by the cake
//!   form, in bytes (default: 5 MiB)
//! - `RUST_LOG` - Standard `tracing` filter directives, read by the binary

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".cake-shop";
const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Error for an unrecognised log format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `pretty` or `json`, got `{0}`")]
pub struct ParseLogFormatError(String);

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory where the cart (and any other local storage keys) live
    pub data_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// Upper bound on an image file embedded through the cake form
    pub max_image_bytes: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_format: LogFormat::default(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("CAKE_SHOP_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let log_format = match lookup("CAKE_SHOP_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("CAKE_SHOP_LOG_FORMAT".to_string(), e.to_string())
                })?,
            None => defaults.log_format,
        };

        let max_image_bytes = match lookup("CAKE_SHOP_MAX_IMAGE_BYTES") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("CAKE_SHOP_MAX_IMAGE_BYTES".to_string(), e.to_string())
            })?,
            None => defaults.max_image_bytes,
        };

        Ok(Self {
            data_dir,
            log_format,
            max_image_bytes,
        })
    }
}
