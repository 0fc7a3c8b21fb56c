//! Art catalog loader.

use std::path::Path;

use hermetic_core::{Art, ArtCategory, ArtError, ArtType};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One art entry; a missing abbreviation is derived from the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtSpec {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// An art type together with the arts registered under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtTypeSpec {
    pub key: String,
    pub name: String,
    pub category: ArtCategory,
    #[serde(default)]
    pub arts: Vec<ArtSpec>,
}

impl ArtTypeSpec {
    pub fn art_type(&self) -> Result<ArtType, ArtError> {
        ArtType::new(self.key.clone(), self.name.clone(), self.category)
    }

    /// Validates and builds every art of this type.
    pub fn build(&self) -> Result<(ArtType, Vec<Art>), ArtError> {
        let art_type = self.art_type()?;
        let arts = self
            .arts
            .iter()
            .map(|spec| {
                let mut draft = Art::draft(art_type.clone());
                draft.set_name(spec.name.clone())?;
                if let Some(abbreviation) = &spec.abbreviation {
                    draft.set_abbreviation(abbreviation.clone())?;
                }
                draft.build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((art_type, arts))
    }
}

/// Art catalog structure for TOML files.
///
/// ```toml
/// [[types]]
/// key = "Hermetic"
/// name = "Technique"
/// category = "technique"
/// arts = [{ name = "Creo" }, { name = "Intellego", abbreviation = "In" }]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtCatalog {
    #[serde(default)]
    pub types: Vec<ArtTypeSpec>,
}

/// Loader for art catalogs from TOML files.
pub struct ArtCatalogLoader;

impl ArtCatalogLoader {
    /// Load an art catalog from a TOML file.
    ///
    /// Returns every declared type with its validated arts, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<(ArtType, Vec<Art>)>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load art catalog {}: {}", path.display(), e))
    }

    /// Parse an art catalog from TOML text.
    pub fn parse(content: &str) -> LoadResult<Vec<(ArtType, Vec<Art>)>> {
        let catalog: ArtCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse art catalog TOML: {}", e))?;
        catalog
            .types
            .iter()
            .map(|spec| {
                spec.build()
                    .map_err(|e| anyhow::anyhow!("Invalid art type {}: {}", spec.name, e))
            })
            .collect()
    }
}
