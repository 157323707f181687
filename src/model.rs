//! Domain records exchanged with the feature voting API.
//!
//! Field names follow the server's snake_case JSON. camelCase spellings are
//! accepted as aliases so either wire dialect decodes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type FeatureId = i64;
pub type UserId = i64;

/// A votable feature request as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub title: String,
    pub description: String,
    pub author: String,
    /// Server-defined status ("open", "planned", ...). Not validated here.
    pub status: String,
    #[serde(alias = "voteCount")]
    pub vote_count: u32,
    /// Opaque ISO-8601 timestamp.
    #[serde(alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: String,
}

impl Feature {
    /// Copy of this feature with only the vote count replaced.
    pub fn with_vote_count(&self, vote_count: u32) -> Self {
        Self {
            vote_count,
            ..self.clone()
        }
    }
}

/// Describes one page of a feature listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(alias = "perPage")]
    pub per_page: u32,
    pub total: u32,
    #[serde(rename = "pages", alias = "pageCount")]
    pub page_count: u32,
    #[serde(alias = "hasNext")]
    pub has_next: bool,
    #[serde(alias = "hasPrev")]
    pub has_prev: bool,
}

/// Body of `GET /api/features`.
///
/// Both fields are optional: a success response lacking them still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturePage {
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Body of the vote / unvote endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "featureId")]
    pub feature_id: Option<FeatureId>,
    #[serde(default, alias = "newVoteCount")]
    pub new_vote_count: Option<u32>,
}

/// Request body for the vote / unvote endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub user_id: UserId,
}

/// Opaque body of `GET /api/users/{id}/votes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserVotes(pub Map<String, Value>);

impl UserVotes {
    /// Feature ids listed under `voted_features`, skipping anything that is
    /// not an integer.
    pub fn voted_feature_ids(&self) -> Vec<FeatureId> {
        self.0
            .get("voted_features")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default()
    }
}

/// Sort order requested from the listing endpoint.
///
/// Unknown values are sent verbatim; the server picks its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    #[default]
    VoteCount,
    CreatedAt,
    Other(String),
}

impl SortBy {
    pub fn as_str(&self) -> &str {
        match self {
            SortBy::VoteCount => "vote_count",
            SortBy::CreatedAt => "created_at",
            SortBy::Other(raw) => raw,
        }
    }
}

impl From<&str> for SortBy {
    fn from(raw: &str) -> Self {
        match raw {
            "vote_count" => SortBy::VoteCount,
            "created_at" => SortBy::CreatedAt,
            other => SortBy::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
