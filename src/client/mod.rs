//! Frontend-side access to the booking API.
//!
//! [`CelebrityStore`] is the asynchronous contract the favorites controller
//! talks to; [`http::HttpStore`] implements it over the JSON API.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::celebrity::Celebrity;
use crate::domain::types::{CelebrityId, Slug, TypeConstraintError};
use crate::dto::celebrities::EngagementDto;

pub mod favorites;
pub mod http;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("celebrity not found")]
    NotFound,

    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] TypeConstraintError),
}

/// Read and counter operations a frontend needs from the store.
#[async_trait]
pub trait CelebrityStore: Send + Sync {
    async fn list_celebrities(&self) -> Result<Vec<Celebrity>, StoreError>;
    async fn get_celebrity_by_slug(&self, slug: &Slug) -> Result<Celebrity, StoreError>;
    async fn increment_views(&self, id: CelebrityId) -> Result<EngagementDto, StoreError>;
    async fn increment_likes(&self, id: CelebrityId) -> Result<EngagementDto, StoreError>;
    /// Never takes the counter below zero.
    async fn decrement_likes(&self, id: CelebrityId) -> Result<EngagementDto, StoreError>;
}
