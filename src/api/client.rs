use crate::api::source::CollectionSource;
use crate::config::Config;
use crate::filter::ListingQuery;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimited,
    #[error("Record not found")]
    NotFound,
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response format: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the admin API
#[derive(Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
}

impl AdminApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("mymanga-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_matches('/'))
    }

    fn record_url(&self, endpoint: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(endpoint),
            urlencoding::encode(id)
        )
    }

    /// Map non-success statuses to error variants
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::NOT_FOUND {
            warn!("✗ Admin API: {} not found", response.url());
            Err(ApiError::NotFound)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("✗ Admin API rate limit exceeded");
            Err(ApiError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            warn!("✗ Admin API error: {} {}", status, message);
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CollectionSource for AdminApiClient {
    async fn list(&self, endpoint: &str, query: &ListingQuery) -> Result<Value, ApiError> {
        let url = self.collection_url(endpoint);
        let params = query.to_params();
        debug!("📡 Admin API: GET {} {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;
        let response = Self::check_status(response).await?;

        // Read as text first so a malformed body surfaces as a decode error
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, endpoint: &str, id: &str) -> Result<Value, ApiError> {
        let url = self.record_url(endpoint, id);
        debug!("📡 Admin API: GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError> {
        let url = self.record_url(endpoint, id);
        debug!("📡 Admin API: DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
