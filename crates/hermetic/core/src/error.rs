//! Common error infrastructure for hermetic-core.
//!
//! Domain-specific errors (e.g. [`LevelError`](crate::LevelError),
//! [`ArtError`](crate::ArtError)) are defined next to the values they
//! validate. This module provides the classification shared by all of them so
//! outer layers can map failures onto responses without matching every variant.

/// Classification of a failure, used by outer layers to pick a response.
///
/// - **InvalidArgument**: malformed input that should be rejected without retry
/// - **AlreadyInitialized**: a write-once field was written twice
/// - **NotFound**: a lookup by name or abbreviation found nothing
/// - **OutOfRange**: arithmetic left the 16-bit level domain
/// - **Internal**: a shared collection is unusable (e.g. poisoned lock)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    AlreadyInitialized,
    NotFound,
    OutOfRange,
    Internal,
}

impl ErrorKind {
    /// Returns true if the caller supplied something wrong, as opposed to the
    /// process being in a bad state.
    pub const fn is_caller_error(&self) -> bool {
        !matches!(self, Self::Internal)
    }
}

/// Common trait for all hermetic errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by who has to act on the failure, not by how bad it is
pub trait HermeticError: core::fmt::Display + core::fmt::Debug {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
