use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub username: String,
    pub password: String,
}

impl AuthPayload {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthPayload")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_debug_redacts_password() {
        let payload = AuthPayload::new("admin", "secret123");
        let debug = format!("{:?}", payload);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn test_auth_response_from_json() {
        let response: AuthResponse = serde_json::from_value(json!({
            "user": {"id": 1, "name": "Admin", "email": "admin@example.com", "role": "admin"},
            "token": "demo-token"
        }))
        .unwrap();
        assert_eq!(response.user.id, 1);
        assert_eq!(response.token, "demo-token");
    }
}
