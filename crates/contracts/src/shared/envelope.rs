//! Uniform response envelope returned by every backend endpoint.
//!
//! ```json
//! { "type": "OK", "message": "...", "data": { "products": [...] }, "pagination": { ... } }
//! ```
//!
//! Business failures arrive as a regular envelope with `type = "ERROR"`.
//! They are values, not errors of the transport.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Discriminator of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvelopeType {
    Ok,
    Error,
    Success,
}

/// Server-side pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    /// 1-based page number
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// Number of pages, never less than one so an empty list still has a page to show.
    pub fn page_count(&self) -> usize {
        self.total_pages.max(1) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Payload of a non-error envelope
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccess<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub pagination: Option<Pagination>,
}

pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

impl<T> ApiEnvelope<T> {
    /// Synthetic `ERROR` envelope, used when a failure never reached the backend
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: EnvelopeType::Error,
            message: Some(message.into()),
            data: None,
            pagination: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == EnvelopeType::Error
    }

    /// Branch on `type`: `ERROR` becomes `Err(message)`, `OK` and `SUCCESS` become `Ok`.
    pub fn into_result(self) -> Result<ApiSuccess<T>, String> {
        match self.kind {
            EnvelopeType::Error => Err(self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())),
            EnvelopeType::Ok | EnvelopeType::Success => Ok(ApiSuccess {
                data: self.data,
                message: self.message,
                pagination: self.pagination,
            }),
        }
    }
}

/// Row type whose list endpoint nests the rows under a fixed key of `data`,
/// e.g. `data.products` or `data.brands`.
pub trait EntityCollection {
    const COLLECTION: &'static str;
}

/// Rows extracted from `data.<T::COLLECTION>`.
///
/// A missing key is a decode error rather than an empty list, so a contract
/// mismatch with the backend is reported instead of rendering "No results".
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    _key: PhantomData<fn() -> T>,
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            _key: PhantomData,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<'de, T> Deserialize<'de> for Collection<T>
where
    T: EntityCollection + DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let items = map
            .remove(T::COLLECTION)
            .ok_or_else(|| de::Error::missing_field(T::COLLECTION))?;
        serde_json::from_value::<Vec<T>>(items)
            .map(Collection::new)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Widget {
        id: String,
    }

    impl EntityCollection for Widget {
        const COLLECTION: &'static str = "widgets";
    }

    #[test]
    fn test_parses_list_envelope_with_pagination() {
        let json = r#"{
            "type": "OK",
            "data": { "widgets": [{ "id": "a" }, { "id": "b" }] },
            "pagination": { "total": 12, "page": 2, "limit": 10, "totalPages": 2, "hasNextPage": false, "hasPrevPage": true }
        }"#;
        let env: ApiEnvelope<Collection<Widget>> = serde_json::from_str(json).unwrap();
        let ok = env.into_result().unwrap();
        let pagination = ok.pagination.unwrap();
        assert_eq!(pagination.page_count(), 2);
        assert!(pagination.has_prev_page);
        assert_eq!(ok.data.unwrap().into_items().len(), 2);
    }

    #[test]
    fn test_error_envelope_is_a_value() {
        let json = r#"{ "type": "ERROR", "message": "Brand already exists" }"#;
        let env: ApiEnvelope<Collection<Widget>> = serde_json::from_str(json).unwrap();
        assert!(env.is_error());
        assert_eq!(env.into_result().unwrap_err(), "Brand already exists");
    }

    #[test]
    fn test_error_without_message_gets_default() {
        let env: ApiEnvelope<()> = serde_json::from_str(r#"{ "type": "ERROR" }"#).unwrap();
        assert_eq!(env.into_result().unwrap_err(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_success_type_is_not_an_error() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{ "type": "SUCCESS", "message": "Deleted" }"#).unwrap();
        let ok = env.into_result().unwrap();
        assert_eq!(ok.message.as_deref(), Some("Deleted"));
        assert!(ok.data.is_none());
    }

    #[test]
    fn test_missing_collection_key_is_rejected() {
        let json = r#"{ "type": "OK", "data": { "brands": [] } }"#;
        let parsed: Result<ApiEnvelope<Collection<Widget>>, _> = serde_json::from_str(json);
        let err = parsed.unwrap_err().to_string();
        assert!(err.contains("widgets"), "unexpected error: {err}");
    }

    #[test]
    fn test_zero_total_pages_still_has_one_page() {
        let p = Pagination {
            total: 0,
            page: 1,
            limit: 10,
            total_pages: 0,
            has_next_page: false,
            has_prev_page: false,
        };
        assert_eq!(p.page_count(), 1);
    }

    #[test]
    fn test_synthetic_error_serializes_without_empty_fields() {
        let env = ApiEnvelope::<()>::error("Network unreachable");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "ERROR", "message": "Network unreachable" })
        );
    }
}
