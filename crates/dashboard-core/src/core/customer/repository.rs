use super::datasource::CustomerRemoteDataSource;
use super::entity::{CreateCustomerPayload, Customer, UpdateCustomerPayload};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get_customers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Customer>>;
    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer>;
    async fn create_customer(&self, payload: CreateCustomerPayload) -> ApiResult<Customer>;
    async fn update_customer(&self, payload: UpdateCustomerPayload) -> ApiResult<Customer>;
    async fn delete_customer(&self, id: &str) -> ApiResult<()>;
}

pub struct RemoteCustomerRepository {
    remote: Arc<dyn CustomerRemoteDataSource>,
}

impl RemoteCustomerRepository {
    pub fn new(remote: Arc<dyn CustomerRemoteDataSource>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl CustomerRepository for RemoteCustomerRepository {
    async fn get_customers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Customer>> {
        self.remote.get_customers(params).await
    }

    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer> {
        self.remote.get_customer_by_id(id).await
    }

    async fn create_customer(&self, payload: CreateCustomerPayload) -> ApiResult<Customer> {
        self.remote.create_customer(payload).await
    }

    async fn update_customer(&self, payload: UpdateCustomerPayload) -> ApiResult<Customer> {
        self.remote.update_customer(payload).await
    }

    async fn delete_customer(&self, id: &str) -> ApiResult<()> {
        self.remote.delete_customer(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::common::result::{ErrorCode, Failure};
    use crate::core::customer::datasource::MockCustomerRemoteDataSource;

    #[tokio::test]
    async fn test_delegates_with_same_arguments() {
        let mut remote = MockCustomerRemoteDataSource::new();
        remote
            .expect_delete_customer()
            .withf(|id| id == "C-001")
            .times(1)
            .returning(|_| Ok(()));
        remote
            .expect_get_customers()
            .withf(|params| *params == PaginationParams::new(2, 5))
            .times(1)
            .returning(|params| Ok(PaginatedResponse::paginate(Vec::new(), params)));

        let repository = RemoteCustomerRepository::new(Arc::new(remote));
        assert!(repository.delete_customer("C-001").await.is_ok());
        let page = repository
            .get_customers(PaginationParams::new(2, 5))
            .await
            .unwrap();
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn test_failure_is_returned_unchanged() {
        let mut remote = MockCustomerRemoteDataSource::new();
        remote
            .expect_get_customer_by_id()
            .returning(|_| Err(Failure::new(ErrorCode::ServerError, "Database down")));

        let repository = RemoteCustomerRepository::new(Arc::new(remote));
        assert_eq!(
            repository.get_customer_by_id("C-001").await,
            Err(Failure::new(ErrorCode::ServerError, "Database down"))
        );
    }
}
