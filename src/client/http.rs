//! [`CelebrityStore`] backed by the booking JSON API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::client::{CelebrityStore, StoreError};
use crate::domain::celebrity::Celebrity;
use crate::domain::types::{CelebrityId, Slug};
use crate::dto::ListingDto;
use crate::dto::celebrities::{CelebrityDto, EngagementDto};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a single booking API instance.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Create a client for `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn post_counter(
        &self,
        id: CelebrityId,
        action: &str,
    ) -> Result<EngagementDto, StoreError> {
        let response = self
            .client
            .post(self.url(&format!("/celebrities/{}/{action}", id.get())))
            .send()
            .await?;
        Self::parse_response(response).await
    }
}

#[async_trait]
impl CelebrityStore for HttpStore {
    async fn list_celebrities(&self) -> Result<Vec<Celebrity>, StoreError> {
        let response = self.client.get(self.url("/celebrities")).send().await?;
        let listing: ListingDto<CelebrityDto> = Self::parse_response(response).await?;
        let celebrities = listing
            .items
            .into_iter()
            .map(Celebrity::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(celebrities)
    }

    async fn get_celebrity_by_slug(&self, slug: &Slug) -> Result<Celebrity, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/celebrities/slug/{}", slug.as_str())))
            .send()
            .await?;
        let dto: CelebrityDto = Self::parse_response(response).await?;
        Ok(Celebrity::try_from(dto)?)
    }

    async fn increment_views(&self, id: CelebrityId) -> Result<EngagementDto, StoreError> {
        self.post_counter(id, "view").await
    }

    async fn increment_likes(&self, id: CelebrityId) -> Result<EngagementDto, StoreError> {
        self.post_counter(id, "like").await
    }

    async fn decrement_likes(&self, id: CelebrityId) -> Result<EngagementDto, StoreError> {
        self.post_counter(id, "unlike").await
    }
}
