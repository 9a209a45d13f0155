use super::entity::{AuthPayload, AuthResponse};
use crate::api::transport::HttpTransport;
use crate::core::common::error_mapping::{ErrorMessages, classify};
use crate::core::common::remote::fetch_one;
use crate::core::common::result::ApiResult;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

const AUTH_PATH: &str = "/auth";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRemoteDataSource: Send + Sync {
    async fn login(&self, payload: AuthPayload) -> ApiResult<AuthResponse>;
}

/// Demo backend: `GET /auth` returns the canned session for any credentials.
pub struct HttpAuthDataSource {
    http: Arc<dyn HttpTransport>,
}

impl HttpAuthDataSource {
    pub fn new(http: Arc<dyn HttpTransport>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthRemoteDataSource for HttpAuthDataSource {
    async fn login(&self, payload: AuthPayload) -> ApiResult<AuthResponse> {
        debug!("logging in as {}", payload.username);
        fetch_one(self.http.as_ref(), AUTH_PATH)
            .await
            .map_err(|e| classify(&e, &ErrorMessages::AUTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::{MockHttpTransport, TransportError};
    use crate::core::common::result::ErrorCode;
    use serde_json::json;

    fn datasource(http: MockHttpTransport) -> HttpAuthDataSource {
        HttpAuthDataSource::new(Arc::new(http))
    }

    #[tokio::test]
    async fn test_login_accepts_any_credentials() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .withf(|path| path == "/auth")
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "user": {"id": 1, "name": "Admin", "email": "admin@example.com", "role": "admin"},
                    "token": "demo-token"
                }))
            });

        let response = datasource(http)
            .login(AuthPayload::new("someone-else", "whatever"))
            .await
            .unwrap();
        assert_eq!(response.token, "demo-token");
        assert_eq!(response.user.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_login_maps_401_to_invalid_credentials() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .returning(|_| Err(TransportError::status(401, None)));

        let failure = datasource(http)
            .login(AuthPayload::new("admin", "secret123"))
            .await
            .unwrap_err();
        assert_eq!(failure.code, ErrorCode::Unauthorized);
        assert_eq!(failure.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_400_is_unknown() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .returning(|_| Err(TransportError::status(400, Some("bad".to_string()))));

        let failure = datasource(http)
            .login(AuthPayload::new("admin", "secret123"))
            .await
            .unwrap_err();
        assert_eq!(failure.code, ErrorCode::UnknownError);
    }

    #[tokio::test]
    async fn test_login_undecodable_body_is_unknown() {
        let mut http = MockHttpTransport::new();
        http.expect_get().returning(|_| Ok(json!({"token": 42})));

        let failure = datasource(http)
            .login(AuthPayload::new("admin", "secret123"))
            .await
            .unwrap_err();
        assert_eq!(failure.code, ErrorCode::UnknownError);
        assert_eq!(failure.message, "An unexpected error occurred");
    }
}
