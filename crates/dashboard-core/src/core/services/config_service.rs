//! Configuration service for managing application configuration

use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::{Config, SessionBackend};
use crate::utils::validation::{validate_timeout, validate_url};
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate and apply a single `key = value` change.
    ///
    /// Accepted keys: `api-base`, `timeout`, `session-store`, `synthesize-fields`.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), AppError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason,
        };

        match field {
            "api-base" => {
                validate_url(value)?;
                self.config.set_api_base(value.trim_end_matches('/').to_string());
            }
            "timeout" => {
                let secs = value
                    .parse::<u64>()
                    .map_err(|e| invalid(e.to_string()))?;
                validate_timeout(secs)?;
                self.config.timeout_seconds = Some(secs);
            }
            "session-store" => {
                let backend = value.parse::<SessionBackend>().map_err(invalid)?;
                self.config.session_store = Some(backend);
            }
            "synthesize-fields" => {
                let enabled = value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?;
                self.config.synthesize_fields = Some(enabled);
            }
            _ => {
                return Err(ConfigError::UnknownField {
                    field: field.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}
