use crate::api::transport::HttpTransport;
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use crate::core::supplier::datasource::HttpSupplierDataSource;
use crate::core::supplier::repository::{RemoteSupplierRepository, SupplierRepository};
use crate::core::supplier::usecase::{
    CreateSupplierUseCase, DeleteSupplierUseCase, GetSupplierDetailUseCase, GetSuppliersUseCase,
    UpdateSupplierUseCase,
};
use crate::core::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};
use std::sync::Arc;

/// Supplier use cases sharing one repository
pub struct SupplierService {
    get_suppliers: GetSuppliersUseCase,
    get_supplier_detail: GetSupplierDetailUseCase,
    create_supplier: CreateSupplierUseCase,
    update_supplier: UpdateSupplierUseCase,
    delete_supplier: DeleteSupplierUseCase,
}

impl SupplierService {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self {
            get_suppliers: GetSuppliersUseCase::new(repository.clone()),
            get_supplier_detail: GetSupplierDetailUseCase::new(repository.clone()),
            create_supplier: CreateSupplierUseCase::new(repository.clone()),
            update_supplier: UpdateSupplierUseCase::new(repository.clone()),
            delete_supplier: DeleteSupplierUseCase::new(repository),
        }
    }

    pub fn remote(http: Arc<dyn HttpTransport>, synthesize_fields: bool) -> Self {
        let datasource = HttpSupplierDataSource::new(http).with_field_synthesis(synthesize_fields);
        Self::new(Arc::new(RemoteSupplierRepository::new(Arc::new(datasource))))
    }

    pub async fn list(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Supplier>> {
        self.get_suppliers.execute(params).await
    }

    pub async fn detail(&self, id: &str) -> ApiResult<Supplier> {
        self.get_supplier_detail.execute(id).await
    }

    pub async fn create(&self, payload: CreateSupplierPayload) -> ApiResult<Supplier> {
        self.create_supplier.execute(payload).await
    }

    pub async fn update(&self, payload: UpdateSupplierPayload) -> ApiResult<Supplier> {
        self.update_supplier.execute(payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_supplier.execute(id).await
    }
}
