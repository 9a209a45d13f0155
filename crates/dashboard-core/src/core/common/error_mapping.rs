//! Classification of transport failures into [`Failure`] values.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. response with status 401 → `UNAUTHORIZED`
//! 2. response with status 404 → `NOT_FOUND`
//! 3. response with status 400 → `VALIDATION_ERROR` (body message or fallback)
//! 4. response with status ≥ 500 → `SERVER_ERROR` (body message or fallback)
//! 5. no response, message mentions "Network Error" or "timeout" → `NETWORK_ERROR`
//! 6. anything else → `UNKNOWN_ERROR`
//!
//! Login skips rule 3 and uses its own messages, see [`ErrorMessages::AUTH`].

use super::result::{ErrorCode, Failure};
use crate::api::transport::TransportError;
use log::warn;

pub const NETWORK_ERROR_MESSAGE: &str = "Unable to connect to server";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Per-datasource wording for the classified failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessages {
    pub unauthorized: &'static str,
    pub not_found: &'static str,
    /// Used for 400 and 5xx responses whose body carries no message.
    pub fallback: &'static str,
    pub map_bad_request: bool,
}

impl ErrorMessages {
    pub const AUTH: ErrorMessages = ErrorMessages {
        unauthorized: "Invalid credentials",
        not_found: "Auth endpoint not found",
        fallback: "Authentication failed",
        map_bad_request: false,
    };

    pub const fn resource(not_found: &'static str) -> Self {
        ErrorMessages {
            unauthorized: "Unauthorized access",
            not_found,
            fallback: "Request failed",
            map_bad_request: true,
        }
    }
}

pub fn classify(error: &TransportError, messages: &ErrorMessages) -> Failure {
    let failure = classify_quiet(error, messages);
    warn!("request failed: {} ({})", failure, error);
    failure
}

fn classify_quiet(error: &TransportError, messages: &ErrorMessages) -> Failure {
    if let Some(response) = error.response() {
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| messages.fallback.to_string());

        match response.status {
            401 => return Failure::new(ErrorCode::Unauthorized, messages.unauthorized),
            404 => return Failure::new(ErrorCode::NotFound, messages.not_found),
            400 if messages.map_bad_request => {
                return Failure::new(ErrorCode::ValidationError, message);
            }
            status if status >= 500 => return Failure::new(ErrorCode::ServerError, message),
            _ => {}
        }
    }

    if let TransportError::NoResponse(message) = error {
        if message.contains("Network Error") || message.contains("timeout") {
            return Failure::new(ErrorCode::NetworkError, NETWORK_ERROR_MESSAGE);
        }
    }

    Failure::new(ErrorCode::UnknownError, UNKNOWN_ERROR_MESSAGE)
}
