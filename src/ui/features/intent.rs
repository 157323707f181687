use crate::model::{Feature, FeatureId};
use crate::ui::mvi::Intent;

/// Transitions of [`FeatureListState`](super::FeatureListState).
///
/// User actions map to `LoadStarted` and `ClearError` directly; the other
/// variants carry the outcome of a finished repository call.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureListIntent {
    /// A listing request was issued.
    LoadStarted,

    /// The listing request succeeded.
    LoadSucceeded { features: Vec<Feature> },

    /// The listing request failed.
    LoadFailed { message: String },

    /// The server confirmed a new vote count after a vote or unvote.
    VoteApplied { feature_id: FeatureId, vote_count: u32 },

    /// A vote or unvote failed.
    VoteFailed { message: String },

    /// User acknowledged the error.
    ClearError,
}

impl Intent for FeatureListIntent {}
