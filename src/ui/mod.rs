//! UI-facing state layer.
//!
//! Rendering lives outside this crate; it only reads the state stream and
//! calls intent methods on the controllers defined here.

pub mod features;
pub mod mvi;
