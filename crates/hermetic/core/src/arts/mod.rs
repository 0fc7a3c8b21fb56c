//! The Hermetic Art taxonomy.
//!
//! Arts are named along two axes: Techniques (the verbs, e.g. Creo) and Forms
//! (the nouns, e.g. Ignem). [`ArtType`] tags each [`Art`] with its axis and
//! defines the ordering used by every sorted collection of arts.

mod art;
mod kind;
mod names;

pub use art::{Art, ArtDraft};
pub use kind::{ArtCategory, ArtType};
pub use names::{derive_abbreviation, valid_abbreviation, valid_name};

use thiserror::Error;

use crate::error::{ErrorKind, HermeticError};
use crate::once::AlreadyInitialized;

/// Errors raised while constructing or looking up arts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArtError {
    #[error("invalid art name {name:?}")]
    InvalidName { name: String },

    #[error("invalid art abbreviation {abbreviation:?}")]
    InvalidAbbreviation { abbreviation: String },

    #[error("abbreviation {abbreviation:?} is longer than name {name:?}")]
    AbbreviationTooLong { name: String, abbreviation: String },

    #[error("invalid art type key {key:?}")]
    InvalidTypeKey { key: String },

    #[error("invalid art type name {name:?}")]
    InvalidTypeName { name: String },

    #[error("art draft is missing its {field}")]
    MissingField { field: &'static str },

    #[error(transparent)]
    AlreadyInitialized(#[from] AlreadyInitialized),

    #[error("no {art_type} named {value:?} exists")]
    NotFound { art_type: String, value: String },
}

impl HermeticError for ArtError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyInitialized(_) => ErrorKind::AlreadyInitialized,
            Self::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidArgument,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "ART_INVALID_NAME",
            Self::InvalidAbbreviation { .. } => "ART_INVALID_ABBREVIATION",
            Self::AbbreviationTooLong { .. } => "ART_ABBREVIATION_TOO_LONG",
            Self::InvalidTypeKey { .. } => "ART_INVALID_TYPE_KEY",
            Self::InvalidTypeName { .. } => "ART_INVALID_TYPE_NAME",
            Self::MissingField { .. } => "ART_MISSING_FIELD",
            Self::AlreadyInitialized(_) => "ART_ALREADY_INITIALIZED",
            Self::NotFound { .. } => "ART_NOT_FOUND",
        }
    }
}
