//! Pure rules for Hermetic Arts and spell guidelines.
//!
//! `hermetic-core` defines the canonical arithmetic (levels, experience cost,
//! magnitudes), the art taxonomy and its ordering, and the guideline template
//! engine. Everything here is synchronous and side-effect free; registries and
//! request handling live in `hermetic-runtime`, data files in
//! `hermetic-content`.
pub mod arts;
pub mod config;
pub mod error;
pub mod guideline;
pub mod level;
pub mod once;

pub use arts::{
    Art, ArtCategory, ArtDraft, ArtError, ArtType, derive_abbreviation, valid_abbreviation,
    valid_name,
};
pub use config::DesignerConfig;
pub use error::{ErrorKind, HermeticError};
pub use guideline::{
    GuidelineError, GuidelineKey, GuidelineLevel, LevelReference, MagnitudeReference, Reference,
    ReferenceSequence, ReferenceTemplate, SequenceWithMagnitudeReference, SpellGuideline,
    SpellGuidelineBuilder, TemplateError, TemplatePart, level_to_magnitude, magnitude_to_level,
    valid_guideline_name,
};
pub use level::{Level, LevelError, experience_cost, valid_level};
pub use once::{AlreadyInitialized, WriteOnce};
