use crate::api::client::ApiError;
use crate::api::models::{Page, RemoteEntity};
use crate::filter::ListingQuery;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Read side of the admin API as seen by listing, detail and stats views.
///
/// Responses come back as raw JSON so one implementation serves every
/// section; typing happens in [`decode_page`] and [`decode_data`].
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// One page of a collection
    async fn list(&self, endpoint: &str, query: &ListingQuery) -> Result<Value, ApiError>;

    /// A single record (or a named sub-resource such as `stats`)
    async fn get(&self, endpoint: &str, id: &str) -> Result<Value, ApiError>;

    async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct PageEnvelope<T> {
    data: Vec<T>,
    total: Option<u64>,
    page: Option<u32>,
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Decode a list response. Missing paging metadata falls back to what was asked for.
pub fn decode_page<E: RemoteEntity>(
    value: Value,
    query: &ListingQuery,
) -> Result<Page<E>, ApiError> {
    let envelope: PageEnvelope<E> = serde_json::from_value(value)?;

    let page = envelope.page.unwrap_or(query.page).max(1);
    let page_size = envelope.limit.unwrap_or(query.page_size).max(1);
    let total = envelope.total.unwrap_or_else(|| {
        u64::from(page - 1) * u64::from(page_size) + envelope.data.len() as u64
    });

    Ok(Page {
        items: envelope.data,
        total,
        page,
        page_size,
    })
}

/// Unwrap the `data` member of a single-record response
pub fn decode_data<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let envelope: DataEnvelope<T> = serde_json::from_value(value)?;
    Ok(envelope.data)
}
