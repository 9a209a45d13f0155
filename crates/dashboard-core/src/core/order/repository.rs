use super::datasource::OrderRemoteDataSource;
use super::entity::{CreateOrderPayload, Order, UpdateOrderPayload};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_orders(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Order>>;
    async fn get_order_by_id(&self, id: &str) -> ApiResult<Order>;
    async fn create_order(&self, payload: CreateOrderPayload) -> ApiResult<Order>;
    async fn update_order(&self, payload: UpdateOrderPayload) -> ApiResult<Order>;
    async fn delete_order(&self, id: &str) -> ApiResult<()>;
}

pub struct RemoteOrderRepository {
    remote: Arc<dyn OrderRemoteDataSource>,
}

impl RemoteOrderRepository {
    pub fn new(remote: Arc<dyn OrderRemoteDataSource>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl OrderRepository for RemoteOrderRepository {
    async fn get_orders(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Order>> {
        self.remote.get_orders(params).await
    }

    async fn get_order_by_id(&self, id: &str) -> ApiResult<Order> {
        self.remote.get_order_by_id(id).await
    }

    async fn create_order(&self, payload: CreateOrderPayload) -> ApiResult<Order> {
        self.remote.create_order(payload).await
    }

    async fn update_order(&self, payload: UpdateOrderPayload) -> ApiResult<Order> {
        self.remote.update_order(payload).await
    }

    async fn delete_order(&self, id: &str) -> ApiResult<()> {
        self.remote.delete_order(id).await
    }
}
