//! Feature repository.
//!
//! Adapts [`FeatureApi`] outcomes into domain results. Every remote failure
//! is folded into a [`RepositoryError`] carrying a readable message; nothing
//! escapes as a panic and nothing is retried.

use std::sync::Arc;

use thiserror::Error;

use crate::config::DEFAULT_PER_PAGE;
use crate::model::{Feature, FeatureId, FeaturePage, SortBy, UserId, UserVotes, VoteResponse};
use crate::remote::{FeatureApi, RemoteError};

/// Domain-level failure of a repository call.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to fetch features: {0}")]
    FetchFeatures(#[source] RemoteError),

    #[error("Failed to vote: {0}")]
    Vote(#[source] RemoteError),

    #[error("Failed to remove vote: {0}")]
    RemoveVote(#[source] RemoteError),

    #[error("Failed to fetch user votes: {0}")]
    UserVotes(#[source] RemoteError),
}

#[derive(Clone)]
pub struct FeatureRepository {
    api: Arc<dyn FeatureApi>,
    per_page: u32,
}

impl FeatureRepository {
    pub fn new(api: Arc<dyn FeatureApi>) -> Self {
        Self {
            api,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// One page of features with its pagination block.
    pub async fn get_feature_page(
        &self,
        page: u32,
        sort_by: &SortBy,
    ) -> Result<FeaturePage, RepositoryError> {
        self.api
            .list_features(page, self.per_page, sort_by)
            .await
            .map_err(|e| {
                tracing::warn!(page, sort_by = %sort_by, error = %e, "Fetching features failed");
                RepositoryError::FetchFeatures(e)
            })
    }

    /// Features of one page in server order.
    ///
    /// A success body without a `features` field yields an empty list.
    pub async fn get_features(
        &self,
        page: u32,
        sort_by: &SortBy,
    ) -> Result<Vec<Feature>, RepositoryError> {
        let page = self.get_feature_page(page, sort_by).await?;
        Ok(page.features.unwrap_or_else(|| {
            tracing::warn!("Feature listing response had no features field, using empty list");
            Vec::new()
        }))
    }

    /// Cast a vote and return the confirmed vote count.
    pub async fn vote(
        &self,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<u32, RepositoryError> {
        let response = self
            .api
            .cast_vote(feature_id, user_id)
            .await
            .map_err(|e| {
                tracing::warn!(feature_id, user_id, error = %e, "Vote failed");
                RepositoryError::Vote(e)
            })?;
        Ok(confirmed_count(feature_id, response))
    }

    /// Retract a vote and return the confirmed vote count.
    pub async fn unvote(
        &self,
        feature_id: FeatureId,
        user_id: UserId,
    ) -> Result<u32, RepositoryError> {
        let response = self
            .api
            .retract_vote(feature_id, user_id)
            .await
            .map_err(|e| {
                tracing::warn!(feature_id, user_id, error = %e, "Removing vote failed");
                RepositoryError::RemoveVote(e)
            })?;
        Ok(confirmed_count(feature_id, response))
    }

    pub async fn user_votes(&self, user_id: UserId) -> Result<UserVotes, RepositoryError> {
        self.api.user_votes(user_id).await.map_err(|e| {
            tracing::warn!(user_id, error = %e, "Fetching user votes failed");
            RepositoryError::UserVotes(e)
        })
    }
}

// A success body without `new_vote_count` reads as zero.
fn confirmed_count(feature_id: FeatureId, response: VoteResponse) -> u32 {
    response.new_vote_count.unwrap_or_else(|| {
        tracing::warn!(feature_id, "Vote response had no new_vote_count, using 0");
        0
    })
}
