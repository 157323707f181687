/// Marker trait for UI state snapshots.
///
/// Snapshots are shared with readers on other tasks (`Send + Sync`) and
/// compared to decide whether subscribers need a notification (`PartialEq`).
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
