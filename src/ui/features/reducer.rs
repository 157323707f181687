use crate::ui::features::intent::FeatureListIntent;
use crate::ui::features::state::FeatureListState;
use crate::ui::mvi::Reducer;

pub struct FeatureListReducer;

impl Reducer for FeatureListReducer {
    type State = FeatureListState;
    type Intent = FeatureListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeatureListIntent::LoadStarted => FeatureListState {
                is_loading: true,
                error: None,
                ..state
            },
            // Full replace, no merge with the previous listing.
            FeatureListIntent::LoadSucceeded { features } => FeatureListState {
                features,
                is_loading: false,
                ..state
            },
            // Stale features stay visible behind the error.
            FeatureListIntent::LoadFailed { message } => FeatureListState {
                is_loading: false,
                error: Some(message),
                ..state
            },
            FeatureListIntent::VoteApplied {
                feature_id,
                vote_count,
            } => {
                if state.feature(feature_id).is_none() {
                    // Feature left the listing while the vote was in flight.
                    return state;
                }
                let features = state
                    .features
                    .iter()
                    .map(|f| {
                        if f.id == feature_id {
                            f.with_vote_count(vote_count)
                        } else {
                            f.clone()
                        }
                    })
                    .collect();
                FeatureListState { features, ..state }
            }
            FeatureListIntent::VoteFailed { message } => FeatureListState {
                error: Some(message),
                ..state
            },
            FeatureListIntent::ClearError => FeatureListState {
                error: None,
                ..state
            },
        }
    }
}
