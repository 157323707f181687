//! Client configuration: API endpoint, timeouts, page size and user identity.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, SessionConfig, DEFAULT_PER_PAGE};
