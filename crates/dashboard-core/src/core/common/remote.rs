//! Helpers shared by the HTTP datasources.

use super::pagination::{PaginatedResponse, PaginationParams};
use crate::api::transport::{HttpTransport, TransportError};
use crate::utils::error_helpers::convert_json_error;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub(crate) fn decode<T: DeserializeOwned>(value: Value, endpoint: &str) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| convert_json_error(e, endpoint))
}

/// Serialize a payload into a JSON object so fields can be added or removed.
pub(crate) fn to_body<T: Serialize>(payload: &T, endpoint: &str) -> Result<Map<String, Value>, TransportError> {
    match serde_json::to_value(payload).map_err(|e| convert_json_error(e, endpoint))? {
        Value::Object(map) => Ok(map),
        other => Err(TransportError::NoResponse(format!(
            "Request body for {} is not a JSON object: {}",
            endpoint, other
        ))),
    }
}

/// Fetch the whole collection and cut the requested page out of it.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    http: &dyn HttpTransport,
    path: &str,
    params: PaginationParams,
) -> Result<PaginatedResponse<T>, TransportError> {
    let all: Vec<T> = decode(http.get(path).await?, path)?;
    Ok(PaginatedResponse::paginate(all, params))
}

pub(crate) async fn fetch_one<T: DeserializeOwned>(
    http: &dyn HttpTransport,
    path: &str,
) -> Result<T, TransportError> {
    decode(http.get(path).await?, path)
}

/// Client-assigned identifier, e.g. `C-1718000000000`.
pub(crate) fn record_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", prefix, now.timestamp_millis())
}

/// Order identifier, e.g. `TRX-2024-1718000000000`.
pub(crate) fn transaction_id(now: DateTime<Utc>) -> String {
    format!("TRX-{}-{}", now.year(), now.timestamp_millis())
}

/// Calendar date in `YYYY-MM-DD` form.
pub(crate) fn join_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// ISO-8601 timestamp with millisecond precision and `Z` suffix.
pub(crate) fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
