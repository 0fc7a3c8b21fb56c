//! Data-driven arts and guidelines.
//!
//! This crate provides loaders for the designer's data files:
//! - Designer configuration (default art names, via TOML)
//! - Art catalogs (art types and their arts, via TOML)
//! - Guideline books (templated guideline entries, via RON)
//!
//! Loaded values are plain `hermetic-core` types; registering them is the
//! runtime's job.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ArtCatalog, ArtCatalogLoader, ArtSpec, ArtTypeSpec, ConfigLoader, ContentFactory,
    GuidelineBook, GuidelineBookLoader, GuidelineSpec, LoadResult,
};
