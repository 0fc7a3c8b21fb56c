//! Runtime orchestration for the spell designer.
//!
//! This crate owns the shared, thread-safe state of a designer session: the
//! registry of known arts and the guideline index. Consumers build a
//! [`Designer`] once at start-up and call it from any thread.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the designer, its builder, and configuration
//! - [`api`] exposes request and error types downstream clients interact with
//! - [`repository`] provides the art registry and guideline storage
pub mod api;
pub mod repository;
pub mod runtime;

pub use api::{GuidelineRequest, Result, RuntimeError};
pub use repository::{
    ArtRegistry, GuidelineRepository, InMemoryGuidelineIndex, RepositoryError,
};
pub use runtime::{Designer, DesignerBuilder, RuntimeConfig};
