//! Designer orchestration and builder.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use hermetic_content::{ContentFactory, GuidelineSpec};
use hermetic_core::{DesignerConfig, GuidelineKey, GuidelineLevel, SpellGuideline};
use tracing::{debug, info};

use crate::api::{GuidelineRequest, Result, RuntimeError};
use crate::repository::{ArtRegistry, GuidelineRepository, InMemoryGuidelineIndex};

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory with `designer.toml`, `arts.toml` and `guidelines.ron`.
    pub data_dir: Option<PathBuf>,
    /// Register the Hermetic techniques and forms at start-up (default: true)
    pub seed_default_arts: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_default_arts: true,
        }
    }
}

impl RuntimeConfig {
    pub const DATA_DIR_VAR: &'static str = "HERMETIC_DATA_DIR";
    pub const SEED_DEFAULT_ARTS_VAR: &'static str = "HERMETIC_SEED_DEFAULT_ARTS";

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup(Self::DATA_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if let Some(seed) = lookup(Self::SEED_DEFAULT_ARTS_VAR).and_then(|v| v.parse().ok()) {
            config.seed_default_arts = seed;
        }

        config
    }
}

/// The spell designer: art registry plus guideline index.
///
/// Cloning is cheap; clones share the same registry and index.
#[derive(Clone)]
pub struct Designer {
    arts: Arc<ArtRegistry>,
    guidelines: Arc<dyn GuidelineRepository>,
}

impl Designer {
    /// Create a new designer builder
    pub fn builder() -> DesignerBuilder {
        DesignerBuilder::new()
    }

    pub fn arts(&self) -> &ArtRegistry {
        &self.arts
    }

    pub fn repository(&self) -> &dyn GuidelineRepository {
        self.guidelines.as_ref()
    }

    /// Creates a guideline from a JSON request body and stores it.
    ///
    /// All three path fields must be non-empty. The technique and form are
    /// resolved by name or abbreviation among the registered Hermetic arts.
    pub fn create_guideline(
        &self,
        technique: &str,
        form: &str,
        level: &str,
        body: &str,
    ) -> Result<SpellGuideline> {
        require("technique", technique)?;
        require("form", form)?;
        require("level", level)?;
        let request = GuidelineRequest::from_json(body)?;
        self.store_guideline(technique, form, level, request)
    }

    /// Creates a guideline from an already parsed request and stores it.
    pub fn store_guideline(
        &self,
        technique: &str,
        form: &str,
        level: &str,
        request: GuidelineRequest,
    ) -> Result<SpellGuideline> {
        let technique_art = self.arts.technique(technique)?;
        let form_art = self.arts.form(form)?;
        let parsed_level = GuidelineLevel::parse(Some(level))?;

        let mut builder = SpellGuideline::builder();
        builder
            .technique(technique_art)?
            .form(form_art)?
            .level(parsed_level)?
            .name(request.name)?;
        if let Some(description) = &request.description {
            builder.description_text(description)?;
        }
        let guideline = builder.build()?;

        let key = GuidelineKey::from((technique, form, level));
        let position = self.guidelines.insert(key, guideline.clone())?;
        info!(
            target: "runtime::designer",
            guideline = %guideline,
            position,
            "Created guideline"
        );
        Ok(guideline)
    }

    /// Guidelines stored for a technique, form and level.
    ///
    /// Returns the members of the addressed bucket whose technique and form
    /// match the request (by name or abbreviation) and whose level equals the
    /// parsed request level.
    pub fn guidelines(
        &self,
        technique: &str,
        form: &str,
        level: &str,
    ) -> Result<Vec<SpellGuideline>> {
        require("technique", technique)?;
        require("form", form)?;
        let parsed_level = GuidelineLevel::parse(Some(level))?;
        let key = GuidelineKey::from((technique, form, level));
        let bucket = self.guidelines.bucket(&key)?;
        Ok(bucket
            .iter()
            .filter(|guideline| {
                guideline.technique().matches(technique)
                    && guideline.form().matches(form)
                    && guideline.level() == parsed_level
            })
            .cloned()
            .collect())
    }

    /// The guideline at `index` in the bucket addressed by the key.
    ///
    /// The index must parse as an integer; negative or out-of-bounds indexes
    /// and unknown keys yield `None`.
    pub fn guideline(
        &self,
        technique: &str,
        form: &str,
        level: &str,
        index: &str,
    ) -> Result<Option<SpellGuideline>> {
        let index: i64 = index.trim().parse().map_err(|_| RuntimeError::InvalidIndex {
            index: index.to_string(),
        })?;
        let Ok(index) = usize::try_from(index) else {
            return Ok(None);
        };
        let key = GuidelineKey::from((technique, form, level));
        Ok(self.guidelines.get(&key, index)?)
    }

    /// Resolves and stores a guideline entry from a data file.
    pub fn load_guideline(&self, spec: &GuidelineSpec) -> Result<SpellGuideline> {
        let technique = self.arts.technique(&spec.technique)?;
        let form = self.arts.form(&spec.form)?;
        let guideline = spec.build(technique, form)?;
        self.guidelines.insert(spec.key(), guideline.clone())?;
        Ok(guideline)
    }
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(RuntimeError::MissingParameter { name })
    } else {
        Ok(())
    }
}

/// Builder for [`Designer`] instances.
pub struct DesignerBuilder {
    config: RuntimeConfig,
    designer_config: Option<DesignerConfig>,
    guidelines: Option<Arc<dyn GuidelineRepository>>,
}

impl DesignerBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            designer_config: None,
            guidelines: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the seeded art names instead of reading `designer.toml`
    pub fn designer_config(mut self, config: DesignerConfig) -> Self {
        self.designer_config = Some(config);
        self
    }

    /// Load content from a data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(dir.into());
        self
    }

    /// Register the default Hermetic arts (default: true)
    pub fn seed_default_arts(mut self, seed: bool) -> Self {
        self.config.seed_default_arts = seed;
        self
    }

    /// Use a custom guideline repository (default: in-memory index)
    pub fn guideline_repository(mut self, repository: Arc<dyn GuidelineRepository>) -> Self {
        self.guidelines = Some(repository);
        self
    }

    /// Build the designer
    pub fn build(self) -> Result<Designer> {
        let factory = self.config.data_dir.as_ref().map(ContentFactory::new);

        let designer_config = match (self.designer_config, &factory) {
            (Some(config), _) => config,
            (None, Some(factory)) => factory.load_config().map_err(content_error)?,
            (None, None) => DesignerConfig::default(),
        };

        let arts = if self.config.seed_default_arts {
            ArtRegistry::with_defaults(&designer_config)?
        } else {
            ArtRegistry::new()
        };

        let designer = Designer {
            arts: Arc::new(arts),
            guidelines: self
                .guidelines
                .unwrap_or_else(|| Arc::new(InMemoryGuidelineIndex::new())),
        };

        if let Some(factory) = factory {
            designer.load_content(&factory)?;
        }

        info!(
            target: "runtime::designer",
            art_types = designer.arts.types()?.len(),
            guidelines = designer.guidelines.len()?,
            "Designer ready"
        );
        Ok(designer)
    }
}

impl Designer {
    fn load_content(&self, factory: &ContentFactory) -> Result<()> {
        debug!(
            target: "runtime::designer",
            data_dir = %factory.data_dir().display(),
            "Loading content"
        );
        for (art_type, arts) in factory.load_arts().map_err(content_error)? {
            self.arts.register_type(art_type)?;
            for art in arts {
                self.arts.register(art)?;
            }
        }
        for spec in factory.load_guidelines().map_err(content_error)? {
            self.load_guideline(&spec)?;
        }
        Ok(())
    }
}

fn content_error(error: impl std::fmt::Display) -> RuntimeError {
    RuntimeError::Content(format!("{error:#}"))
}
