use super::entity::{CreateCustomerPayload, Customer, UpdateCustomerPayload};
use crate::api::transport::{HttpTransport, TransportError};
use crate::core::common::error_mapping::{ErrorMessages, classify};
use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
use crate::core::common::remote::{decode, fetch_one, fetch_page, join_date, record_id, to_body};
use crate::core::common::result::ApiResult;
use crate::core::common::status::AccountStatus;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

const CUSTOMERS_PATH: &str = "/customers";
const MESSAGES: ErrorMessages = ErrorMessages::resource("Customer not found");

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRemoteDataSource: Send + Sync {
    async fn get_customers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Customer>>;
    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer>;
    async fn create_customer(&self, payload: CreateCustomerPayload) -> ApiResult<Customer>;
    async fn update_customer(&self, payload: UpdateCustomerPayload) -> ApiResult<Customer>;
    async fn delete_customer(&self, id: &str) -> ApiResult<()>;
}

pub struct HttpCustomerDataSource {
    http: Arc<dyn HttpTransport>,
    synthesize_fields: bool,
}

impl HttpCustomerDataSource {
    pub fn new(http: Arc<dyn HttpTransport>) -> Self {
        Self {
            http,
            synthesize_fields: true,
        }
    }

    /// Toggle client-side `id` and `join_date` assignment on create.
    pub fn with_field_synthesis(mut self, enabled: bool) -> Self {
        self.synthesize_fields = enabled;
        self
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", CUSTOMERS_PATH, id)
    }

    fn create_body(&self, payload: &CreateCustomerPayload) -> Result<Value, TransportError> {
        let mut body = to_body(payload, CUSTOMERS_PATH)?;
        if self.synthesize_fields {
            let now = Utc::now();
            body.insert("id".to_string(), Value::from(record_id("C", now)));
            body.insert("join_date".to_string(), Value::from(join_date(now)));
        }
        body.entry("status")
            .or_insert_with(|| Value::from(AccountStatus::default().as_str()));
        Ok(Value::Object(body))
    }
}

#[async_trait]
impl CustomerRemoteDataSource for HttpCustomerDataSource {
    async fn get_customers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Customer>> {
        fetch_page(self.http.as_ref(), CUSTOMERS_PATH, params)
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }

    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer> {
        fetch_one(self.http.as_ref(), &Self::item_path(id))
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }

    async fn create_customer(&self, payload: CreateCustomerPayload) -> ApiResult<Customer> {
        let result = async {
            let body = self.create_body(&payload)?;
            let created = self.http.post(CUSTOMERS_PATH, body).await?;
            decode(created, CUSTOMERS_PATH)
        }
        .await;
        result.map_err(|e| classify(&e, &MESSAGES))
    }

    async fn update_customer(&self, payload: UpdateCustomerPayload) -> ApiResult<Customer> {
        let path = Self::item_path(&payload.id);
        let result = async {
            let body = Value::Object(to_body(&payload, &path)?);
            let updated = self.http.patch(&path, body).await?;
            decode(updated, &path)
        }
        .await;
        result.map_err(|e| classify(&e, &MESSAGES))
    }

    async fn delete_customer(&self, id: &str) -> ApiResult<()> {
        self.http
            .delete(&Self::item_path(id))
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }
}
