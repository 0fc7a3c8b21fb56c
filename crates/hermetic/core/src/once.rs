//! Write-once cells for staged construction.

use thiserror::Error;

use crate::error::{ErrorKind, HermeticError};

/// Raised when a write-once field is written a second time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the {field} is already set")]
pub struct AlreadyInitialized {
    pub field: &'static str,
}

impl HermeticError for AlreadyInitialized {
    fn kind(&self) -> ErrorKind {
        ErrorKind::AlreadyInitialized
    }

    fn error_code(&self) -> &'static str {
        "ALREADY_INITIALIZED"
    }
}

/// A field that is either uninitialized or set exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOnce<T> {
    field: &'static str,
    value: Option<T>,
}

impl<T> WriteOnce<T> {
    /// Creates an empty cell for the named field.
    pub const fn new(field: &'static str) -> Self {
        Self { field, value: None }
    }

    /// Stores the value, failing if one is already present.
    pub fn set(&mut self, value: T) -> Result<(), AlreadyInitialized> {
        self.ensure_unset()?;
        self.value = Some(value);
        Ok(())
    }

    /// Fails if the cell already holds a value.
    ///
    /// Setters check this before validating their input so a second write
    /// reports `AlreadyInitialized` even when the new value is also invalid.
    pub fn ensure_unset(&self) -> Result<(), AlreadyInitialized> {
        match self.value {
            Some(_) => Err(AlreadyInitialized { field: self.field }),
            None => Ok(()),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}
