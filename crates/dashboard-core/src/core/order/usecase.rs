use super::entity::{CreateOrderPayload, Order, UpdateOrderPayload};
use super::repository::OrderRepository;
use super::validation::{validate_create, validate_id, validate_list, validate_update};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use std::sync::Arc;

pub struct GetOrdersUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrdersUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Order>> {
        validate_list(&params)?;
        self.repository.get_orders(params).await
    }
}

pub struct GetOrderDetailUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrderDetailUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<Order> {
        validate_id(id)?;
        self.repository.get_order_by_id(id).await
    }
}

pub struct CreateOrderUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl CreateOrderUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: CreateOrderPayload) -> ApiResult<Order> {
        validate_create(&payload)?;
        self.repository.create_order(payload).await
    }
}

pub struct UpdateOrderUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl UpdateOrderUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: UpdateOrderPayload) -> ApiResult<Order> {
        validate_update(&payload)?;
        self.repository.update_order(payload).await
    }
}

pub struct DeleteOrderUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl DeleteOrderUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<()> {
        validate_id(id)?;
        self.repository.delete_order(id).await
    }
}
