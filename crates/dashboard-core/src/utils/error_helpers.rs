use crate::api::transport::TransportError;
use serde::Deserialize;

/// Helper functions for standardizing error conversions across the codebase.
/// Errors without a server response carry a message; connection failures are
/// prefixed with "Network Error" and timeouts mention "timeout" so the
/// classifier can recognise them.
pub fn convert_request_error(
    error: reqwest::Error,
    endpoint: &str,
    timeout_secs: u64,
) -> TransportError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, timeout_secs);
    }
    if error.is_connect() || error.is_request() {
        return TransportError::NoResponse(format!("Network Error ({}): {}", endpoint, error));
    }
    TransportError::NoResponse(format!("{}: {}", endpoint, error))
}

pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> TransportError {
    TransportError::NoResponse(format!(
        "timeout of {}ms exceeded ({})",
        timeout_secs * 1000,
        endpoint
    ))
}

/// Convert a failure while reading the response body
pub fn convert_body_error(error: reqwest::Error, endpoint: &str) -> TransportError {
    if error.is_timeout() {
        return TransportError::NoResponse(format!("timeout while reading {}", endpoint));
    }
    TransportError::NoResponse(format!("Failed to read response from {}: {}", endpoint, error))
}

/// Convert JSON deserialization errors
pub fn convert_json_error(error: serde_json::Error, endpoint: &str) -> TransportError {
    TransportError::NoResponse(format!("JSON parse error ({}): {}", endpoint, error))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull `message` out of a JSON error body, ignoring empty or non-JSON bodies.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}
