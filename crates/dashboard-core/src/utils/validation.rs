//! Input validation utilities
//!
//! Field predicates shared by the per-entity validators, plus checks for
//! configuration values entered on the command line.

use crate::core::common::result::{ApiResult, Failure};
use crate::error::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// True when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Fail with `message` when `value` is blank.
pub fn require(value: &str, message: &str) -> ApiResult<()> {
    if is_blank(value) {
        return Err(Failure::validation(message));
    }
    Ok(())
}

/// Fail with `message` when a provided optional value is blank.
pub fn require_if_present(value: Option<&str>, message: &str) -> ApiResult<()> {
    match value {
        Some(v) => require(v, message),
        None => Ok(()),
    }
}

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "api-base".to_string(),
            value: url.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "api-base".to_string(),
            value: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Validate a request timeout in seconds
pub fn validate_timeout(timeout_secs: u64) -> Result<(), ConfigError> {
    if timeout_secs == 0 || timeout_secs > 300 {
        return Err(ConfigError::InvalidValue {
            field: "timeout".to_string(),
            value: timeout_secs.to_string(),
            reason: "timeout must be between 1 and 300 seconds".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::common::result::ErrorCode;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("budi@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co.id"));
        assert!(!is_valid_email("budi@example"));
        assert!(!is_valid_email("budi example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("budi@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_require_messages() {
        let err = require("  ", "Phone is required").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Phone is required");
        assert!(require("0812", "Phone is required").is_ok());

        assert!(require_if_present(None, "Full name cannot be empty").is_ok());
        let err = require_if_present(Some(""), "Full name cannot be empty").unwrap_err();
        assert_eq!(err.message, "Full name cannot be empty");
    }

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:4200").is_ok());
        assert!(validate_url("https://api.example.com").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("localhost:4200").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_timeout() {
        assert!(validate_timeout(10).is_ok());
        assert!(validate_timeout(0).is_err());
        assert!(validate_timeout(301).is_err());
    }
}
