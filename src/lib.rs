//! Client-side state layer for the feature voting screen.
//!
//! ```text
//! UI intent ──→ FeatureListController ──→ FeatureRepository ──→ FeatureApi ──→ HTTP
//!     ↑                  │
//!     └── watch::Receiver<FeatureListState> ←┘
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod remote;
pub mod repository;
pub mod ui;
