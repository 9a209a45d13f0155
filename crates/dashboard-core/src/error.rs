use crate::core::common::result::{ErrorCode, Failure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("{0}")]
    Api(#[from] Failure),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Failed to read input: {0}")]
    Input(String),
    #[error("Failed to render output: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Session data could not be read: {message}")]
    SessionParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration field '{field}'")]
    UnknownField { field: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(failure) => match failure.code {
                ErrorCode::Unauthorized | ErrorCode::ServerError => ErrorSeverity::High,
                ErrorCode::NetworkError | ErrorCode::UnknownError => ErrorSeverity::Medium,
                ErrorCode::NotFound | ErrorCode::ValidationError => ErrorSeverity::Low,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::HttpClient(_) => ErrorSeverity::Critical,
        }
    }

    /// The failure code when this error came out of the request pipeline.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            AppError::Api(failure) => Some(failure.code),
            _ => None,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(failure) => match failure.code {
                ErrorCode::Unauthorized => {
                    Some("'dashboard-cli auth login' to sign in again".to_string())
                }
                ErrorCode::NetworkError => Some(
                    "Check that the API server is running and reachable ('dashboard-cli config show')"
                        .to_string(),
                ),
                ErrorCode::NotFound => {
                    Some("Use the matching 'list' command to see available IDs".to_string())
                }
                _ => None,
            },
            AppError::Config(_) => {
                Some("'dashboard-cli config set --help' lists the accepted values".to_string())
            }
            _ => None,
        }
    }
}
