//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the repositories and the designer can stay focused on storage and
//! orchestration.

pub mod errors;
pub mod request;

pub use errors::{Result, RuntimeError};
pub use request::GuidelineRequest;
