use super::entity::AuthPayload;
use crate::core::common::result::{ApiResult, Failure};
use crate::utils::validation::require;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Username, then password presence, then password length.
///
/// Presence is checked on trimmed input, the length on the raw password.
pub fn validate_login(payload: &AuthPayload) -> ApiResult<()> {
    require(&payload.username, "Username is required")?;
    require(&payload.password, "Password is required")?;
    if payload.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Failure::validation(
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(username: &str, password: &str) -> Option<String> {
        validate_login(&AuthPayload::new(username, password))
            .err()
            .map(|f| f.message)
    }

    #[test]
    fn test_login_rules_in_order() {
        assert_eq!(message("", "x").as_deref(), Some("Username is required"));
        assert_eq!(message("   ", "").as_deref(), Some("Username is required"));
        assert_eq!(message("admin", "  ").as_deref(), Some("Password is required"));
        assert_eq!(
            message("admin", "12345").as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(message("admin", "123456"), None);
    }
}
