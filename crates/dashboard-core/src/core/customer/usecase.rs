use super::entity::{CreateCustomerPayload, Customer, UpdateCustomerPayload};
use super::repository::CustomerRepository;
use super::validation::{validate_create, validate_id, validate_list, validate_update};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use std::sync::Arc;

pub struct GetCustomersUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomersUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Customer>> {
        validate_list(&params)?;
        self.repository.get_customers(params).await
    }
}

pub struct GetCustomerDetailUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerDetailUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<Customer> {
        validate_id(id)?;
        self.repository.get_customer_by_id(id).await
    }
}

pub struct CreateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: CreateCustomerPayload) -> ApiResult<Customer> {
        validate_create(&payload)?;
        self.repository.create_customer(payload).await
    }
}

pub struct UpdateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: UpdateCustomerPayload) -> ApiResult<Customer> {
        validate_update(&payload)?;
        self.repository.update_customer(payload).await
    }
}

pub struct DeleteCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<()> {
        validate_id(id)?;
        self.repository.delete_customer(id).await
    }
}
