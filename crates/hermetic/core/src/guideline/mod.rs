//! Spell guidelines and their text templates.
//!
//! A guideline names a class of magical effect for a Technique + Form + level.
//! Its description is a [`ReferenceSequence`]: literal text interleaved with
//! references that render either generically or for a concrete casting level,
//! using the magnitude ladder in [`magnitude`].
//!
//! Guidelines are indexed externally by [`GuidelineKey`].

pub mod key;
pub mod level;
pub mod magnitude;
pub mod spell;
pub mod template;

pub use key::GuidelineKey;
pub use level::GuidelineLevel;
pub use magnitude::{MODIFIER_LIMIT, level_to_magnitude, magnitude_to_level};
pub use spell::{SpellGuideline, SpellGuidelineBuilder, valid_guideline_name};
pub use template::{
    LevelReference, MagnitudeReference, Reference, ReferenceSequence, ReferenceTemplate,
    SequenceWithMagnitudeReference, TemplatePart,
};

use thiserror::Error;

use crate::error::{ErrorKind, HermeticError};
use crate::level::LevelError;
use crate::once::AlreadyInitialized;

/// Errors raised by magnitude arithmetic and template parsing/rendering.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("magnitude modifier {modifier} is outside ±{limit}", limit = MODIFIER_LIMIT)]
    ModifierOutOfRange { modifier: i32 },

    #[error("magnitude {magnitude} maps to level {level}, outside the 16-bit range")]
    LevelOutOfRange { magnitude: i32, level: i32 },

    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder { position: usize },

    #[error("unmatched '}}' at byte {position}")]
    UnmatchedBrace { position: usize },

    #[error("unknown placeholder {{{placeholder}}}")]
    UnknownPlaceholder { placeholder: String },
}

impl HermeticError for TemplateError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::LevelOutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ModifierOutOfRange { .. } => "TEMPLATE_MODIFIER_OUT_OF_RANGE",
            Self::LevelOutOfRange { .. } => "TEMPLATE_LEVEL_OUT_OF_RANGE",
            Self::UnclosedPlaceholder { .. } => "TEMPLATE_UNCLOSED_PLACEHOLDER",
            Self::UnmatchedBrace { .. } => "TEMPLATE_UNMATCHED_BRACE",
            Self::UnknownPlaceholder { .. } => "TEMPLATE_UNKNOWN_PLACEHOLDER",
        }
    }
}

/// Errors raised while building a [`SpellGuideline`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuidelineError {
    #[error(transparent)]
    AlreadyInitialized(#[from] AlreadyInitialized),

    #[error("guideline is missing its {field}")]
    MissingField { field: &'static str },

    #[error("invalid guideline name {name:?}")]
    InvalidName { name: String },

    #[error("{art} is not a technique")]
    NotATechnique { art: String },

    #[error("{art} is not a form")]
    NotAForm { art: String },

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl HermeticError for GuidelineError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyInitialized(_) => ErrorKind::AlreadyInitialized,
            Self::Level(err) => err.kind(),
            Self::Template(err) => err.kind(),
            _ => ErrorKind::InvalidArgument,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized(_) => "GUIDELINE_ALREADY_INITIALIZED",
            Self::MissingField { .. } => "GUIDELINE_MISSING_FIELD",
            Self::InvalidName { .. } => "GUIDELINE_INVALID_NAME",
            Self::NotATechnique { .. } => "GUIDELINE_NOT_A_TECHNIQUE",
            Self::NotAForm { .. } => "GUIDELINE_NOT_A_FORM",
            Self::Level(err) => err.error_code(),
            Self::Template(err) => err.error_code(),
        }
    }
}
