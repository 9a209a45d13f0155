//! Result type used across all use cases, repositories and datasources.
//!
//! A call either succeeds with its payload or fails with a [`Failure`]
//! carrying one of the six [`ErrorCode`]s and a human readable message.
//! [`to_envelope`] renders a result in the `{success, data | error}` JSON
//! shape consumed by front ends.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Closed set of failure codes. No other code is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NetworkError,
    Unauthorized,
    NotFound,
    ValidationError,
    ServerError,
    UnknownError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::NetworkError,
        ErrorCode::Unauthorized,
        ErrorCode::NotFound,
        ErrorCode::ValidationError,
        ErrorCode::ServerError,
        ErrorCode::UnknownError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ServerError => "SERVER_ERROR",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failure side of [`ApiResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct Failure {
    pub code: ErrorCode,
    pub message: String,
}

impl Failure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a pre-flight validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }
}

pub type ApiResult<T> = std::result::Result<T, Failure>;

pub fn success<T>(data: T) -> ApiResult<T> {
    Ok(data)
}

pub fn failure<T>(code: ErrorCode, message: impl Into<String>) -> ApiResult<T> {
    Err(Failure::new(code, message))
}

/// Render a result as `{"success": true, "data": ..}` or
/// `{"success": false, "error": {"code": .., "message": ..}}`.
pub fn to_envelope<T: Serialize>(result: &ApiResult<T>) -> Result<Value, serde_json::Error> {
    let mut envelope = Map::new();
    match result {
        Ok(data) => {
            envelope.insert("success".to_string(), Value::Bool(true));
            envelope.insert("data".to_string(), serde_json::to_value(data)?);
        }
        Err(failure) => {
            envelope.insert("success".to_string(), Value::Bool(false));
            envelope.insert("error".to_string(), serde_json::to_value(failure)?);
        }
    }
    Ok(Value::Object(envelope))
}
