//! Feature list screen: state, intents, reducer and the controller that
//! drives them from repository calls.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::FeatureListController;
pub use intent::FeatureListIntent;
pub use reducer::FeatureListReducer;
pub use state::FeatureListState;
