//! Guideline book loader.
//!
//! Entries name their arts by string; resolving them to registered arts is
//! left to the caller, so a book can be parsed without a registry.

use std::path::Path;

use hermetic_core::{
    Art, DesignerConfig, GuidelineError, GuidelineKey, GuidelineLevel, SpellGuideline,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

fn generic_level() -> String {
    DesignerConfig::GENERIC_LEVEL.to_string()
}

/// One guideline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineSpec {
    /// Technique name or abbreviation.
    pub technique: String,
    /// Form name or abbreviation.
    pub form: String,
    #[serde(default = "generic_level")]
    pub level: String,
    pub name: String,
    /// Description template text, e.g. `"Heat as a torch, {level+1} to ignite"`.
    #[serde(default)]
    pub description: Option<String>,
}

impl GuidelineSpec {
    /// Index key of the entry.
    pub fn key(&self) -> GuidelineKey {
        GuidelineKey::from((
            self.technique.as_str(),
            self.form.as_str(),
            self.level.as_str(),
        ))
    }

    /// Builds the guideline from already resolved arts.
    pub fn build(&self, technique: Art, form: Art) -> Result<SpellGuideline, GuidelineError> {
        let mut builder = SpellGuideline::builder();
        builder
            .technique(technique)?
            .form(form)?
            .level(GuidelineLevel::parse(Some(self.level.as_str()))?)?
            .name(self.name.clone())?;
        if let Some(description) = &self.description {
            builder.description_text(description)?;
        }
        builder.build()
    }
}

/// Guideline book structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidelineBook {
    #[serde(default)]
    pub guidelines: Vec<GuidelineSpec>,
}

/// Loader for guideline books from RON files.
pub struct GuidelineBookLoader;

impl GuidelineBookLoader {
    /// Load a guideline book from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<GuidelineSpec>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to load guideline book {}: {}", path.display(), e)
        })
    }

    /// Parse a guideline book from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<GuidelineSpec>> {
        let book: GuidelineBook = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse guideline book RON: {}", e))?;
        Ok(book.guidelines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = r#"(
        guidelines: [
            (
                technique: "Creo",
                form: "Ignem",
                level: "10",
                name: "Create a fire",
                description: Some("Heat as a torch, {level+1} to ignite"),
            ),
            (
                technique: "Pe",
                form: "Ig",
                name: "Douse any flame",
            ),
        ],
    )"#;

    #[test]
    fn parses_entries_with_defaults() {
        let specs = GuidelineBookLoader::parse(BOOK).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].key(), GuidelineKey::from(("Creo", "Ignem", "10")));
        assert_eq!(specs[1].level, "Generic");
        assert_eq!(specs[1].description, None);
    }

    #[test]
    fn builds_guidelines_from_resolved_arts() {
        let specs = GuidelineBookLoader::parse(BOOK).unwrap();
        let spell = specs[0]
            .build(Art::technique("Creo").unwrap(), Art::form("Ignem").unwrap())
            .unwrap();
        assert_eq!(
            spell.to_string(),
            "CrIg10: Create a fire. Heat as a torch, 15 to ignite"
        );
    }

    #[test]
    fn bad_level_fails_to_build() {
        let spec = GuidelineSpec {
            technique: "Creo".into(),
            form: "Ignem".into(),
            level: "high".into(),
            name: "Bonfire".into(),
            description: None,
        };
        let err = spec
            .build(Art::technique("Creo").unwrap(), Art::form("Ignem").unwrap())
            .unwrap_err();
        assert!(matches!(err, GuidelineError::Level(_)));
    }

    #[test]
    fn malformed_ron_fails() {
        assert!(GuidelineBookLoader::parse("(guidelines: [(name: 1)])").is_err());
    }
}
