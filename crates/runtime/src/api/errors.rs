//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, guideline construction, and request
//! parsing so callers can map them onto their own responses.

use hermetic_core::{ErrorKind, GuidelineError, HermeticError, LevelError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("request parameter {name} is missing or empty")]
    MissingParameter { name: &'static str },

    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("invalid guideline index {index:?}")]
    InvalidIndex { index: String },

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Guideline(#[from] GuidelineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load content: {0}")]
    Content(String),
}

impl HermeticError for RuntimeError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter { .. } | Self::InvalidBody(_) | Self::InvalidIndex { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Level(err) => err.kind(),
            Self::Guideline(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::Content(_) => ErrorKind::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "RUNTIME_MISSING_PARAMETER",
            Self::InvalidBody(_) => "RUNTIME_INVALID_BODY",
            Self::InvalidIndex { .. } => "RUNTIME_INVALID_INDEX",
            Self::Level(err) => err.error_code(),
            Self::Guideline(err) => err.error_code(),
            Self::Repository(err) => err.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
