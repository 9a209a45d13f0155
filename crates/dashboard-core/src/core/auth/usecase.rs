use super::entity::{AuthPayload, AuthResponse};
use super::repository::AuthRepository;
use super::validation::validate_login;
use crate::core::common::result::ApiResult;
use std::sync::Arc;

pub struct LoginUseCase {
    repository: Arc<dyn AuthRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: AuthPayload) -> ApiResult<AuthResponse> {
        validate_login(&payload)?;
        self.repository.login(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::entity::User;
    use crate::core::auth::repository::MockAuthRepository;
    use crate::core::common::result::ErrorCode;

    fn admin_session() -> AuthResponse {
        AuthResponse {
            user: User {
                id: 1,
                name: "Admin".to_string(),
                email: "admin@example.com".to_string(),
                role: "admin".to_string(),
            },
            token: "demo-token".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_username_fails_without_calling_repository() {
        let mut repository = MockAuthRepository::new();
        repository.expect_login().never();

        let usecase = LoginUseCase::new(Arc::new(repository));
        let failure = usecase
            .execute(AuthPayload::new("", "x"))
            .await
            .unwrap_err();
        assert_eq!(failure.code, ErrorCode::ValidationError);
        assert_eq!(failure.message, "Username is required");
    }

    #[tokio::test]
    async fn test_short_password_fails_without_calling_repository() {
        let mut repository = MockAuthRepository::new();
        repository.expect_login().never();

        let usecase = LoginUseCase::new(Arc::new(repository));
        let failure = usecase
            .execute(AuthPayload::new("admin", "12345"))
            .await
            .unwrap_err();
        assert_eq!(failure.message, "Password must be at least 6 characters");
    }

    #[tokio::test]
    async fn test_valid_payload_returns_repository_result() {
        let mut repository = MockAuthRepository::new();
        repository
            .expect_login()
            .times(1)
            .returning(|_| Ok(admin_session()));

        let usecase = LoginUseCase::new(Arc::new(repository));
        let response = usecase
            .execute(AuthPayload::new("admin", "secret123"))
            .await
            .unwrap();
        assert_eq!(response, admin_session());
    }
}
