use crate::api::transport::HttpTransport;
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::result::ApiResult;
use crate::core::order::datasource::HttpOrderDataSource;
use crate::core::order::repository::{OrderRepository, RemoteOrderRepository};
use crate::core::order::usecase::{
    CreateOrderUseCase, DeleteOrderUseCase, GetOrderDetailUseCase, GetOrdersUseCase,
    UpdateOrderUseCase,
};
use crate::core::order::{CreateOrderPayload, Order, UpdateOrderPayload};
use std::sync::Arc;

/// Order use cases sharing one repository
pub struct OrderService {
    get_orders: GetOrdersUseCase,
    get_order_detail: GetOrderDetailUseCase,
    create_order: CreateOrderUseCase,
    update_order: UpdateOrderUseCase,
    delete_order: DeleteOrderUseCase,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            get_orders: GetOrdersUseCase::new(repository.clone()),
            get_order_detail: GetOrderDetailUseCase::new(repository.clone()),
            create_order: CreateOrderUseCase::new(repository.clone()),
            update_order: UpdateOrderUseCase::new(repository.clone()),
            delete_order: DeleteOrderUseCase::new(repository),
        }
    }

    pub fn remote(http: Arc<dyn HttpTransport>, synthesize_fields: bool) -> Self {
        let datasource = HttpOrderDataSource::new(http).with_field_synthesis(synthesize_fields);
        Self::new(Arc::new(RemoteOrderRepository::new(Arc::new(datasource))))
    }

    pub async fn list(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Order>> {
        self.get_orders.execute(params).await
    }

    pub async fn detail(&self, id: &str) -> ApiResult<Order> {
        self.get_order_detail.execute(id).await
    }

    pub async fn create(&self, payload: CreateOrderPayload) -> ApiResult<Order> {
        self.create_order.execute(payload).await
    }

    pub async fn update(&self, payload: UpdateOrderPayload) -> ApiResult<Order> {
        self.update_order.execute(payload).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_order.execute(id).await
    }
}
