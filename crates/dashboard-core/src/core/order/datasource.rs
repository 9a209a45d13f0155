use super::entity::{CreateOrderPayload, Order, OrderStatus, UpdateOrderPayload, total_amount};
use crate::api::transport::{HttpTransport, TransportError};
use crate::core::common::error_mapping::{ErrorMessages, classify};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::remote::{decode, fetch_one, fetch_page, timestamp, to_body, transaction_id};
use crate::core::common::result::ApiResult;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

const ORDERS_PATH: &str = "/orders";
const MESSAGES: ErrorMessages = ErrorMessages::resource("Order not found");

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRemoteDataSource: Send + Sync {
    async fn get_orders(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Order>>;
    async fn get_order_by_id(&self, id: &str) -> ApiResult<Order>;
    async fn create_order(&self, payload: CreateOrderPayload) -> ApiResult<Order>;
    async fn update_order(&self, payload: UpdateOrderPayload) -> ApiResult<Order>;
    async fn delete_order(&self, id: &str) -> ApiResult<()>;
}

pub struct HttpOrderDataSource {
    http: Arc<dyn HttpTransport>,
    synthesize_fields: bool,
}

impl HttpOrderDataSource {
    pub fn new(http: Arc<dyn HttpTransport>) -> Self {
        Self {
            http,
            synthesize_fields: true,
        }
    }

    /// Toggle client-side `id` and `created_at` assignment on create.
    /// `total_amount` is always derived from the items.
    pub fn with_field_synthesis(mut self, enabled: bool) -> Self {
        self.synthesize_fields = enabled;
        self
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", ORDERS_PATH, id)
    }

    fn create_body(&self, payload: &CreateOrderPayload) -> Result<Value, TransportError> {
        let mut body = to_body(payload, ORDERS_PATH)?;
        body.insert(
            "total_amount".to_string(),
            Value::from(total_amount(&payload.items)),
        );
        if self.synthesize_fields {
            let now = Utc::now();
            body.insert("id".to_string(), Value::from(transaction_id(now)));
            body.insert("created_at".to_string(), Value::from(timestamp(now)));
        }
        body.entry("status")
            .or_insert_with(|| Value::from(OrderStatus::default().as_str()));
        Ok(Value::Object(body))
    }

    fn update_body(payload: &UpdateOrderPayload, path: &str) -> Result<Value, TransportError> {
        let mut body = to_body(payload, path)?;
        if let Some(items) = &payload.items {
            body.insert("total_amount".to_string(), Value::from(total_amount(items)));
        }
        Ok(Value::Object(body))
    }
}

#[async_trait]
impl OrderRemoteDataSource for HttpOrderDataSource {
    async fn get_orders(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Order>> {
        fetch_page(self.http.as_ref(), ORDERS_PATH, params)
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }

    async fn get_order_by_id(&self, id: &str) -> ApiResult<Order> {
        fetch_one(self.http.as_ref(), &Self::item_path(id))
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }

    async fn create_order(&self, payload: CreateOrderPayload) -> ApiResult<Order> {
        let result = async {
            let body = self.create_body(&payload)?;
            let created = self.http.post(ORDERS_PATH, body).await?;
            decode(created, ORDERS_PATH)
        }
        .await;
        result.map_err(|e| classify(&e, &MESSAGES))
    }

    async fn update_order(&self, payload: UpdateOrderPayload) -> ApiResult<Order> {
        let path = Self::item_path(&payload.id);
        let result = async {
            let body = Self::update_body(&payload, &path)?;
            let updated = self.http.patch(&path, body).await?;
            decode(updated, &path)
        }
        .await;
        result.map_err(|e| classify(&e, &MESSAGES))
    }

    async fn delete_order(&self, id: &str) -> ApiResult<()> {
        self.http
            .delete(&Self::item_path(id))
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }
}
