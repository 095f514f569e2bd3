//! HTTP Backend
//!
//! `Backend` over the marketplace REST API using `fetch`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rental_admin_core::{ApiError, ApiResult, Backend, ListEnvelope, RecordEnvelope, RecordId, Resource};

/// Characters left as-is in an identifier path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::COLLECTION)
    }

    fn record_url<R: Resource>(&self, id: &RecordId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            R::COLLECTION,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

/// Map any non-2xx response to `ApiError::Status`
async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => response.status_text(),
    };
    Err(ApiError::Status { status, message })
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list<R: Resource>(&self) -> ApiResult<Vec<R>> {
        let url = self.collection_url::<R>();
        log::debug!("[API] GET {}", url);
        let response = check(Request::get(&url).send().await.map_err(network)?).await?;
        let body: ListEnvelope<R> = response.json().await.map_err(decode)?;
        Ok(body.items)
    }

    async fn fetch<R: Resource>(&self, id: &RecordId) -> ApiResult<R> {
        let url = self.record_url::<R>(id);
        log::debug!("[API] GET {}", url);
        let response = check(Request::get(&url).send().await.map_err(network)?).await?;
        let body: RecordEnvelope<R> = response.json().await.map_err(decode)?;
        body.into_record().ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> ApiResult<()> {
        let url = self.collection_url::<R>();
        log::debug!("[API] POST {}", url);
        let request = Request::post(&url).json(draft).map_err(decode)?;
        check(request.send().await.map_err(network)?).await?;
        Ok(())
    }

    async fn update<R: Resource>(&self, id: &RecordId, draft: &R::Draft) -> ApiResult<()> {
        let url = self.record_url::<R>(id);
        log::debug!("[API] PUT {}", url);
        let request = Request::put(&url).json(draft).map_err(decode)?;
        check(request.send().await.map_err(network)?).await?;
        Ok(())
    }

    async fn delete<R: Resource>(&self, id: &RecordId) -> ApiResult<()> {
        let url = self.record_url::<R>(id);
        log::debug!("[API] DELETE {}", url);
        check(Request::delete(&url).send().await.map_err(network)?).await?;
        Ok(())
    }
}
