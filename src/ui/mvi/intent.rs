/// Marker trait for intents.
///
/// Intents cover both user actions (vote, clear error) and the results of
/// remote calls started by those actions. Results may be produced on any
/// task, hence `Send`.
pub trait Intent: Send + 'static {}
