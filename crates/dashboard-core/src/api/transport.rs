//! Transport seam between datasources and the HTTP client.
//!
//! Datasources only see JSON values and a [`TransportError`], which records
//! whether the server answered at all. That distinction drives the failure
//! classification in [`crate::core::common::error_mapping`].

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// An HTTP response that came back with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    /// `message` field of the JSON error body, when the server sent one.
    pub message: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed with status code {}", .0.status)]
    Response(ErrorResponse),
    #[error("{0}")]
    NoResponse(String),
}

impl TransportError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        TransportError::Response(ErrorResponse { status, message })
    }

    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            TransportError::Response(response) => Some(response),
            TransportError::NoResponse(_) => None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, TransportError>;
    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError>;
    async fn patch(&self, path: &str, body: Value) -> Result<Value, TransportError>;
    async fn delete(&self, path: &str) -> Result<(), TransportError>;
}
