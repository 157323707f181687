use crate::model::{Feature, FeatureId};
use crate::ui::mvi::UiState;

/// Everything the feature list screen renders.
///
/// `is_loading` and `error` are independent: an error from a previous call
/// stays visible until a new load starts or it is cleared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureListState {
    /// Current page in server order.
    pub features: Vec<Feature>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UiState for FeatureListState {}

impl FeatureListState {
    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
