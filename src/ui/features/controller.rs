use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::model::{FeatureId, SortBy, UserId};
use crate::remote::{HttpFeatureApi, RemoteError};
use crate::repository::FeatureRepository;
use crate::ui::features::intent::FeatureListIntent;
use crate::ui::features::reducer::FeatureListReducer;
use crate::ui::features::state::FeatureListState;
use crate::ui::mvi::Reducer;

/// Listings always request the first page.
const FIRST_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy)]
enum VoteAction {
    Cast,
    Retract,
}

/// Owns the feature list state and runs intents against the repository.
///
/// Each intent method spawns its own task and returns immediately. Results
/// are reduced into whatever state is live when the task finishes, so
/// updates land in completion order, not issue order. Nothing is cancelled:
/// a task that outlives the controller still finishes and updates a channel
/// nobody reads.
///
/// Must be created inside a Tokio runtime.
#[derive(Clone)]
pub struct FeatureListController {
    inner: Arc<Inner>,
}

struct Inner {
    repository: FeatureRepository,
    user_id: UserId,
    state: watch::Sender<FeatureListState>,
}

impl Inner {
    /// Reduce `intent` into the live state under the channel lock.
    ///
    /// Subscribers are only woken when the state actually changed.
    fn dispatch(&self, intent: FeatureListIntent) -> bool {
        self.state.send_if_modified(|current| {
            let next = FeatureListReducer::reduce(current.clone(), intent);
            if next == *current {
                return false;
            }
            *current = next;
            true
        })
    }
}

impl FeatureListController {
    /// Create the controller and start loading features in the default order.
    pub fn new(repository: FeatureRepository, user_id: UserId) -> Self {
        let (state, _) = watch::channel(FeatureListState::default());
        let controller = Self {
            inner: Arc::new(Inner {
                repository,
                user_id,
                state,
            }),
        };
        let _ = controller.load_features(SortBy::default());
        controller
    }

    /// Wire an HTTP-backed controller from configuration.
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        let api = HttpFeatureApi::new(&config.api)?;
        let repository = FeatureRepository::new(Arc::new(api)).with_per_page(config.api.per_page);
        Ok(Self::new(repository, config.session.user_id))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FeatureListState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<FeatureListState> {
        self.inner.state.subscribe()
    }

    /// Reload the listing in `sort_by` order.
    ///
    /// `is_loading` is set and any error cleared before this returns. On
    /// failure the previous features stay in place next to the error.
    pub fn load_features(&self, sort_by: SortBy) -> JoinHandle<()> {
        tracing::info!(sort_by = %sort_by, "Loading features");
        self.inner.dispatch(FeatureListIntent::LoadStarted);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let intent = match inner.repository.get_features(FIRST_PAGE, &sort_by).await {
                Ok(features) => {
                    tracing::debug!(count = features.len(), sort_by = %sort_by, "Features loaded");
                    FeatureListIntent::LoadSucceeded { features }
                }
                Err(err) => FeatureListIntent::LoadFailed {
                    message: err.to_string(),
                },
            };
            inner.dispatch(intent);
        })
    }

    /// Vote for `feature_id` as the current user.
    ///
    /// The vote count changes only once the server confirms it.
    pub fn vote(&self, feature_id: FeatureId) -> JoinHandle<()> {
        self.spawn_vote(feature_id, VoteAction::Cast)
    }

    /// Retract the current user's vote for `feature_id`.
    pub fn unvote(&self, feature_id: FeatureId) -> JoinHandle<()> {
        self.spawn_vote(feature_id, VoteAction::Retract)
    }

    pub fn clear_error(&self) {
        self.inner.dispatch(FeatureListIntent::ClearError);
    }

    fn spawn_vote(&self, feature_id: FeatureId, action: VoteAction) -> JoinHandle<()> {
        tracing::info!(feature_id, action = ?action, "Submitting vote");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let result = match action {
                VoteAction::Cast => inner.repository.vote(feature_id, inner.user_id).await,
                VoteAction::Retract => inner.repository.unvote(feature_id, inner.user_id).await,
            };
            let intent = match result {
                Ok(vote_count) => FeatureListIntent::VoteApplied {
                    feature_id,
                    vote_count,
                },
                Err(err) => FeatureListIntent::VoteFailed {
                    message: err.to_string(),
                },
            };
            if !inner.dispatch(intent) {
                tracing::debug!(feature_id, "Vote result did not change visible state");
            }
        })
    }
}
