//! Error types raised by repository implementations.

use hermetic_core::{ArtError, ErrorKind, HermeticError};
use thiserror::Error;

/// Errors surfaced by the art registry and guideline repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Art(#[from] ArtError),

    #[error("guideline {name:?} already exists under {key}")]
    DuplicateGuideline { key: String, name: String },
}

impl HermeticError for RepositoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::LockPoisoned => ErrorKind::Internal,
            Self::Art(err) => err.kind(),
            Self::DuplicateGuideline { .. } => ErrorKind::InvalidArgument,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Art(err) => err.error_code(),
            Self::DuplicateGuideline { .. } => "REPOSITORY_DUPLICATE_GUIDELINE",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
