use super::datasource::AuthRemoteDataSource;
use super::entity::{AuthPayload, AuthResponse};
use crate::core::common::result::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, payload: AuthPayload) -> ApiResult<AuthResponse>;
}

pub struct RemoteAuthRepository {
    remote: Arc<dyn AuthRemoteDataSource>,
}

impl RemoteAuthRepository {
    pub fn new(remote: Arc<dyn AuthRemoteDataSource>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl AuthRepository for RemoteAuthRepository {
    async fn login(&self, payload: AuthPayload) -> ApiResult<AuthResponse> {
        self.remote.login(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::datasource::MockAuthRemoteDataSource;
    use crate::core::common::result::{ErrorCode, Failure};

    #[tokio::test]
    async fn test_login_passes_result_through() {
        let mut remote = MockAuthRemoteDataSource::new();
        remote
            .expect_login()
            .withf(|payload| payload.username == "admin")
            .times(1)
            .returning(|_| Err(Failure::new(ErrorCode::NetworkError, "Unable to connect to server")));

        let repository = RemoteAuthRepository::new(Arc::new(remote));
        let failure = repository
            .login(AuthPayload::new("admin", "secret123"))
            .await
            .unwrap_err();
        assert_eq!(
            failure,
            Failure::new(ErrorCode::NetworkError, "Unable to connect to server")
        );
    }
}
