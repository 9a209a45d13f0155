use super::entity::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};
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

const SUPPLIERS_PATH: &str = "/suppliers";
const MESSAGES: ErrorMessages = ErrorMessages::resource("Supplier not found");

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRemoteDataSource: Send + Sync {
    async fn get_suppliers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Supplier>>;
    async fn get_supplier_by_id(&self, id: &str) -> ApiResult<Supplier>;
    async fn create_supplier(&self, payload: CreateSupplierPayload) -> ApiResult<Supplier>;
    async fn update_supplier(&self, payload: UpdateSupplierPayload) -> ApiResult<Supplier>;
    async fn delete_supplier(&self, id: &str) -> ApiResult<()>;
}

pub struct HttpSupplierDataSource {
    http: Arc<dyn HttpTransport>,
    synthesize_fields: bool,
}

impl HttpSupplierDataSource {
    pub fn new(http: Arc<dyn HttpTransport>) -> Self {
        Self {
            http,
            synthesize_fields: true,
        }
    }

    pub fn with_field_synthesis(mut self, enabled: bool) -> Self {
        self.synthesize_fields = enabled;
        self
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", SUPPLIERS_PATH, id)
    }

    fn create_body(&self, payload: &CreateSupplierPayload) -> Result<Value, TransportError> {
        let mut body = to_body(payload, SUPPLIERS_PATH)?;
        if self.synthesize_fields {
            let now = Utc::now();
            body.insert("id".to_string(), Value::from(record_id("S", now)));
            body.insert("join_date".to_string(), Value::from(join_date(now)));
        }
        body.entry("status")
            .or_insert_with(|| Value::from(AccountStatus::default().as_str()));
        Ok(Value::Object(body))
    }
}

#[async_trait]
impl SupplierRemoteDataSource for HttpSupplierDataSource {
    async fn get_suppliers(&self, params: PaginationParams) -> ApiResult<PaginatedResponse<Supplier>> {
        fetch_page(self.http.as_ref(), SUPPLIERS_PATH, params)
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }

    async fn get_supplier_by_id(&self, id: &str) -> ApiResult<Supplier> {
        fetch_one(self.http.as_ref(), &Self::item_path(id))
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }

    async fn create_supplier(&self, payload: CreateSupplierPayload) -> ApiResult<Supplier> {
        let result = async {
            let body = self.create_body(&payload)?;
            let created = self.http.post(SUPPLIERS_PATH, body).await?;
            decode(created, SUPPLIERS_PATH)
        }
        .await;
        result.map_err(|e| classify(&e, &MESSAGES))
    }

    async fn update_supplier(&self, payload: UpdateSupplierPayload) -> ApiResult<Supplier> {
        let path = Self::item_path(&payload.id);
        let result = async {
            let body = Value::Object(to_body(&payload, &path)?);
            let updated = self.http.patch(&path, body).await?;
            decode(updated, &path)
        }
        .await;
        result.map_err(|e| classify(&e, &MESSAGES))
    }

    async fn delete_supplier(&self, id: &str) -> ApiResult<()> {
        self.http
            .delete(&Self::item_path(id))
            .await
            .map_err(|e| classify(&e, &MESSAGES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockHttpTransport;
    use crate::core::common::result::ErrorCode;

    #[tokio::test]
    async fn test_create_synthesizes_supplier_id() {
        let mut http = MockHttpTransport::new();
        http.expect_post()
            .withf(|path, body| {
                path == "/suppliers"
                    && body["id"].as_str().is_some_and(|id| id.starts_with("S-"))
                    && body["status"] == "Active"
            })
            .times(1)
            .returning(|_, body| Ok(body));

        let payload = CreateSupplierPayload {
            company_name: "PT Sumber Makmur".to_string(),
            contact_name: "Siti".to_string(),
            email: "sales@sumbermakmur.co.id".to_string(),
            phone: "0211234567".to_string(),
            address: "Surabaya".to_string(),
            status: None,
        };
        let supplier = HttpSupplierDataSource::new(Arc::new(http))
            .create_supplier(payload)
            .await
            .unwrap();
        assert!(supplier.id.starts_with("S-"));
        assert_eq!(supplier.join_date.len(), 10);
    }

    #[tokio::test]
    async fn test_bad_request_uses_body_message() {
        let mut http = MockHttpTransport::new();
        http.expect_patch().returning(|_, _| {
            Err(TransportError::status(
                400,
                Some("Email already registered".to_string()),
            ))
        });

        let payload = UpdateSupplierPayload {
            email: Some("dup@example.com".to_string()),
            ..UpdateSupplierPayload::new("S-001")
        };
        let failure = HttpSupplierDataSource::new(Arc::new(http))
            .update_supplier(payload)
            .await
            .unwrap_err();
        assert_eq!(failure.code, ErrorCode::ValidationError);
        assert_eq!(failure.message, "Email already registered");
    }

    #[tokio::test]
    async fn test_delete_404_is_supplier_not_found() {
        let mut http = MockHttpTransport::new();
        http.expect_delete()
            .withf(|path| path == "/suppliers/S-404")
            .returning(|_| Err(TransportError::status(404, None)));

        let failure = HttpSupplierDataSource::new(Arc::new(http))
            .delete_supplier("S-404")
            .await
            .unwrap_err();
        assert_eq!(failure.message, "Supplier not found");
    }
}
