use super::entity::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};
use super::repository::SupplierRepository;
use super::validation::{validate_create, validate_id, validate_list, validate_update};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use std::sync::Arc;

pub struct GetSuppliersUseCase {
    repository: Arc<dyn SupplierRepository>,
}

impl GetSuppliersUseCase {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Supplier>> {
        validate_list(&params)?;
        self.repository.get_suppliers(params).await
    }
}

pub struct GetSupplierDetailUseCase {
    repository: Arc<dyn SupplierRepository>,
}

impl GetSupplierDetailUseCase {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<Supplier> {
        validate_id(id)?;
        self.repository.get_supplier_by_id(id).await
    }
}

pub struct CreateSupplierUseCase {
    repository: Arc<dyn SupplierRepository>,
}

impl CreateSupplierUseCase {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: CreateSupplierPayload) -> ApiResult<Supplier> {
        validate_create(&payload)?;
        self.repository.create_supplier(payload).await
    }
}

pub struct UpdateSupplierUseCase {
    repository: Arc<dyn SupplierRepository>,
}

impl UpdateSupplierUseCase {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: UpdateSupplierPayload) -> ApiResult<Supplier> {
        validate_update(&payload)?;
        self.repository.update_supplier(payload).await
    }
}

pub struct DeleteSupplierUseCase {
    repository: Arc<dyn SupplierRepository>,
}

impl DeleteSupplierUseCase {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<()> {
        validate_id(id)?;
        self.repository.delete_supplier(id).await
    }
}
