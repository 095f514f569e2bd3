//! Backend Layer - REST Collaborator Trait
//!
//! The admin screens never talk HTTP directly; they go through `Backend`,
//! which the browser shell implements over `fetch` and tests implement in
//! memory.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::record::{RecordId, Resource};

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend call errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Non-2xx response
    Status { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
    NotFound(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Body of `GET /{collection}`
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<R> {
    pub items: Vec<R>,
}

/// Body of `GET /{collection}/{id}`: a bare record or a one-key wrapper
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordEnvelope<R> {
    Bare(R),
    Wrapped(BTreeMap<String, R>),
}

impl<R> RecordEnvelope<R> {
    pub fn into_record(self) -> Option<R> {
        match self {
            RecordEnvelope::Bare(record) => Some(record),
            RecordEnvelope::Wrapped(map) if map.len() == 1 => map.into_values().next(),
            RecordEnvelope::Wrapped(_) => None,
        }
    }
}

/// REST operations for every resource collection
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /{collection}`
    async fn list<R: Resource>(&self) -> ApiResult<Vec<R>>;

    /// `GET /{collection}/{id}`
    async fn fetch<R: Resource>(&self, id: &RecordId) -> ApiResult<R>;

    /// `POST /{collection}`
    async fn create<R: Resource>(&self, draft: &R::Draft) -> ApiResult<()>;

    /// `PUT /{collection}/{id}`
    async fn update<R: Resource>(&self, id: &RecordId, draft: &R::Draft) -> ApiResult<()>;

    /// `DELETE /{collection}/{id}`
    async fn delete<R: Resource>(&self, id: &RecordId) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::Guide;

    const GUIDE: &str = r#"{"_id":"g1","name":"Nimal","image":"i","contact":"0771234567",
        "location":"Galle","age":"42","language":"English","description":"d"}"#;

    #[test]
    fn test_list_envelope() {
        let body = format!(r#"{{"items":[{}]}}"#, GUIDE);
        let list: ListEnvelope<Guide> = serde_json::from_str(&body).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Nimal");
    }

    #[test]
    fn test_record_envelope_bare_and_wrapped() {
        let bare: RecordEnvelope<Guide> = serde_json::from_str(GUIDE).unwrap();
        assert_eq!(bare.into_record().unwrap().id, RecordId::new("g1"));

        let wrapped: RecordEnvelope<Guide> =
            serde_json::from_str(&format!(r#"{{"guide":{}}}"#, GUIDE)).unwrap();
        assert_eq!(wrapped.into_record().unwrap().id, RecordId::new("g1"));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status { status: 500, message: "boom".to_string() };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }
}
