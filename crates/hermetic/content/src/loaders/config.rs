//! Designer configuration loader.

use std::path::Path;

use hermetic_core::DesignerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for designer configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<DesignerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<DesignerConfig> {
        let config: DesignerConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_art_names() {
        let config = ConfigLoader::parse(
            r#"
            technique_names = ["Creo", "Rego"]
            form_names = ["Ignem"]
            "#,
        )
        .unwrap();
        assert_eq!(config.technique_names, vec!["Creo", "Rego"]);
        assert_eq!(config.form_names, vec!["Ignem"]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/designer.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/designer.toml"));
    }
}
