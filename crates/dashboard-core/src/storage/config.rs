//! Configuration management
//!
//! Settings live in `~/.config/dashboard-cli/config.toml` unless a directory
//! is given explicitly. Base URL priority: CLI argument > DASHBOARD_API_BASE
//! environment variable > config.toml > built-in default.

use super::Result;
use crate::api::client::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const API_BASE_ENV: &str = "DASHBOARD_API_BASE";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "dashboard-cli";

/// Where the session token and user are kept between runs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Keyring,
    File,
}

impl SessionBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionBackend::Keyring => "keyring",
            SessionBackend::File => "file",
        }
    }
}

impl fmt::Display for SessionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keyring" => Ok(SessionBackend::Keyring),
            "file" => Ok(SessionBackend::File),
            other => Err(format!(
                "unknown session store '{}': expected keyring or file",
                other
            )),
        }
    }
}

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub session_store: Option<SessionBackend>,
    pub synthesize_fields: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `~/.config/dashboard-cli`
    pub fn default_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join(APP_DIR_NAME))
    }

    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    fn config_file_path() -> Result<PathBuf> {
        Ok(Self::file_in(&Self::default_dir()?))
    }

    /// Get the API base URL with fallback to environment variable and default
    pub fn get_api_base(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn set_api_base(&mut self, url: String) {
        self.api_base = Some(url);
    }

    pub fn timeout(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn session_backend(&self) -> SessionBackend {
        self.session_store.unwrap_or_default()
    }

    pub fn synthesize_fields(&self) -> bool {
        self.synthesize_fields.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_base.is_none());
        assert_eq!(config.timeout(), 10);
        assert_eq!(config.session_backend(), SessionBackend::Keyring);
        assert!(config.synthesize_fields());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            api_base: Some("http://example.test".to_string()),
            timeout_seconds: Some(30),
            session_store: Some(SessionBackend::File),
            synthesize_fields: Some(false),
        };
        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("session_store = \"file\""));

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
        assert!(!loaded_config.synthesize_fields());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path)).expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "session_store = \"cloud\"").unwrap();

        assert!(matches!(
            Config::load(Some(config_path)),
            Err(StorageError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_session_backend_parse() {
        assert_eq!("file".parse::<SessionBackend>(), Ok(SessionBackend::File));
        assert_eq!(
            "keyring".parse::<SessionBackend>(),
            Ok(SessionBackend::Keyring)
        );
        assert!("cloud".parse::<SessionBackend>().is_err());
    }
}
