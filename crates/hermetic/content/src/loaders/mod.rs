//! Content loaders for reading designer data from files.
//!
//! Each loader parses one file format into `hermetic-core` values and reports
//! failures as `anyhow` errors carrying the offending path.

pub mod arts;
pub mod config;
pub mod factory;
pub mod guidelines;

pub use arts::{ArtCatalog, ArtCatalogLoader, ArtSpec, ArtTypeSpec};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use guidelines::{GuidelineBook, GuidelineBookLoader, GuidelineSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
