use crate::api::transport::HttpTransport;
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use crate::core::customer::datasource::HttpCustomerDataSource;
use crate::core::customer::repository::{CustomerRepository, RemoteCustomerRepository};
use crate::core::customer::usecase::{
    CreateCustomerUseCase, DeleteCustomerUseCase, GetCustomerDetailUseCase, GetCustomersUseCase,
    UpdateCustomerUseCase,
};
use crate::core::customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload};
use std::sync::Arc;

/// Customer use cases sharing one repository
pub struct CustomerService {
    get_customers: GetCustomersUseCase,
    get_customer_detail: GetCustomerDetailUseCase,
    create_customer: CreateCustomerUseCase,
    update_customer: UpdateCustomerUseCase,
    delete_customer: DeleteCustomerUseCase,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            get_customers: GetCustomersUseCase::new(repository.clone()),
            get_customer_detail: GetCustomerDetailUseCase::new(repository.clone()),
            create_customer: CreateCustomerUseCase::new(repository.clone()),
            update_customer: UpdateCustomerUseCase::new(repository.clone()),
            delete_customer: DeleteCustomerUseCase::new(repository),
        }
    }

    /// Wire the HTTP datasource and repository over `http`.
    pub fn remote(http: Arc<dyn HttpTransport>, synthesize_fields: bool) -> Self {
        let datasource = HttpCustomerDataSource::new(http).with_field_synthesis(synthesize_fields);
        Self::new(Arc::new(RemoteCustomerRepository::new(Arc::new(datasource))))
    }

    pub async fn list(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Customer>> {
        self.get_customers.execute(params).await
    }

    pub async fn detail(&self, id: &str) -> ApiResult<Customer> {
        self.get_customer_detail.execute(id).await
    }

    pub async fn create(&self, payload: CreateCustomerPayload) -> ApiResult<Customer> {
        self.create_customer.execute(payload).await
    }

    pub async fn update(&self, payload: UpdateCustomerPayload) -> ApiResult<Customer> {
        self.update_customer.execute(payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_customer.execute(id).await
    }
}
