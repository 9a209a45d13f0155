use super::datasource::SupplierRemoteDataSource;
use super::entity::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn get_suppliers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Supplier>>;
    async fn get_supplier_by_id(&self, id: &str) -> ApiResult<Supplier>;
    async fn create_supplier(&self, payload: CreateSupplierPayload) -> ApiResult<Supplier>;
    async fn update_supplier(&self, payload: UpdateSupplierPayload) -> ApiResult<Supplier>;
    async fn delete_supplier(&self, id: &str) -> ApiResult<()>;
}

pub struct RemoteSupplierRepository {
    remote: Arc<dyn SupplierRemoteDataSource>,
}

impl RemoteSupplierRepository {
    pub fn new(remote: Arc<dyn SupplierRemoteDataSource>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl SupplierRepository for RemoteSupplierRepository {
    async fn get_suppliers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Supplier>> {
        self.remote.get_suppliers(params).await
    }

    async fn get_supplier_by_id(&self, id: &str) -> ApiResult<Supplier> {
        self.remote.get_supplier_by_id(id).await
    }

    async fn create_supplier(&self, payload: CreateSupplierPayload) -> ApiResult<Supplier> {
        self.remote.create_supplier(payload).await
    }

    async fn update_supplier(&self, payload: UpdateSupplierPayload) -> ApiResult<Supplier> {
        self.remote.update_supplier(payload).await
    }

    async fn delete_supplier(&self, id: &str) -> ApiResult<()> {
        self.remote.delete_supplier(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::supplier::datasource::MockSupplierRemoteDataSource;

    #[tokio::test]
    async fn test_list_delegates_params() {
        let mut remote = MockSupplierRemoteDataSource::new();
        remote
            .expect_get_suppliers()
            .withf(|params| params.page == 3 && params.page_size == 20)
            .times(1)
            .returning(|params| Ok(PaginatedResponse::paginate(Vec::new(), params)));

        let repository = RemoteSupplierRepository::new(Arc::new(remote));
        let page = repository
            .get_suppliers(PaginationParams::new(3, 20))
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.page_size, 20);
    }
}
