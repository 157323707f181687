//! Remote client for the feature voting API.
//!
//! Every operation issues exactly one request and resolves to either a typed
//! payload or a [`RemoteError`]. Nothing is retried or cached here.

mod error;
mod http;

use async_trait::async_trait;

use crate::model::{FeatureId, FeaturePage, SortBy, UserId, UserVotes, VoteResponse};

pub use error::RemoteError;
pub use http::HttpFeatureApi;

/// The four operations the feature voting server exposes to this client.
#[async_trait]
pub trait FeatureApi: Send + Sync {
    /// `GET /api/features` for one page in the requested order.
    async fn list_features(
        &self,
        page: u32,
        per_page: u32,
        sort_by: &SortBy,
    ) -> Result<FeaturePage, RemoteError>;

    /// `POST /api/features/{id}/vote`.
    async fn cast_vote(
        &self,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<VoteResponse, RemoteError>;

    /// `DELETE /api/features/{id}/vote`.
    async fn retract_vote(
        &self,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<VoteResponse, RemoteError>;

    /// `GET /api/users/{id}/votes`.
    async fn user_votes(&self, user_id: UserId) -> Result<UserVotes, RemoteError>;
}
