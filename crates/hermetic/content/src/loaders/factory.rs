//! Content factory for loading designer data from a directory.

use std::path::{Path, PathBuf};

use hermetic_core::{Art, ArtType, DesignerConfig};

use crate::loaders::{ArtCatalogLoader, ConfigLoader, GuidelineBookLoader, GuidelineSpec, LoadResult};

/// Content factory that loads designer content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── designer.toml
/// ├── arts.toml
/// └── guidelines.ron
/// ```
///
/// Every file is optional; a missing file loads as empty (or, for
/// `designer.toml`, as the default configuration).
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "designer.toml";
    pub const ARTS_FILE: &'static str = "arts.toml";
    pub const GUIDELINES_FILE: &'static str = "guidelines.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the designer configuration from `designer.toml`.
    pub fn load_config(&self) -> LoadResult<DesignerConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(DesignerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load art types and arts from `arts.toml`.
    pub fn load_arts(&self) -> LoadResult<Vec<(ArtType, Vec<Art>)>> {
        let path = self.data_dir.join(Self::ARTS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        ArtCatalogLoader::load(&path)
    }

    /// Load guideline entries from `guidelines.ron`.
    pub fn load_guidelines(&self) -> LoadResult<Vec<GuidelineSpec>> {
        let path = self.data_dir.join(Self::GUIDELINES_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        GuidelineBookLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
