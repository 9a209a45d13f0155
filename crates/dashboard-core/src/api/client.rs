use crate::api::transport::{HttpTransport, TransportError};
use crate::error::AppError;
use crate::utils::error_helpers::*;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_API_BASE: &str = "http://localhost:4200";
const USER_AGENT: &str = concat!("dashboard-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    pub base_url: String,
    pub session_token: Option<String>,
    timeout_secs: u64,
}

impl DashboardClient {
    // Create baseClient with default settings
    pub fn new(base_url: String) -> Result<Self, AppError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::HttpClient(format!("Failed to create HTTP client: {}", e)))?;

        Ok(DashboardClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token: None,
            timeout_secs,
        })
    }

    pub fn set_session_token(&mut self, token: String) {
        self.session_token = Some(token);
    }

    pub fn get_session_token(&self) -> Option<String> {
        self.session_token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }

        request
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs))?;

        let status = response.status();
        debug!("{} -> {}", endpoint, status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        Err(TransportError::status(
            status.as_u16(),
            extract_error_message(&error_text),
        ))
    }

    async fn read_json(response: Response, endpoint: &str) -> Result<Value, TransportError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| convert_body_error(e, endpoint))?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| convert_json_error(e, endpoint))
    }
}

#[async_trait]
impl HttpTransport for DashboardClient {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        debug!("GET {}", path);
        let response = self.send(self.build_request(Method::GET, path), path).await?;
        Self::read_json(response, path).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        debug!("POST {}", path);
        let request = self.build_request(Method::POST, path).json(&body);
        let response = self.send(request, path).await?;
        Self::read_json(response, path).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        debug!("PATCH {}", path);
        let request = self.build_request(Method::PATCH, path).json(&body);
        let response = self.send(request, path).await?;
        Self::read_json(response, path).await
    }

    async fn delete(&self, path: &str) -> Result<(), TransportError> {
        debug!("DELETE {}", path);
        self.send(self.build_request(Method::DELETE, path), path)
            .await?;
        Ok(())
    }
}
