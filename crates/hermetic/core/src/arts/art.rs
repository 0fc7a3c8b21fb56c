//! Named, abbreviated arts.

use std::cmp::Ordering;
use std::fmt;

use super::names::{derive_abbreviation, valid_abbreviation, valid_name};
use super::{ArtError, ArtType};
use crate::once::WriteOnce;

/// A Hermetic Art such as Creo (Cr) or Ignem (Ig).
///
/// Immutable once built. Ordered by art type, then name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Art {
    art_type: ArtType,
    name: String,
    abbreviation: String,
}

impl Art {
    /// Creates an art with an explicit abbreviation.
    pub fn new(
        art_type: ArtType,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Result<Self, ArtError> {
        let name = name.into();
        let abbreviation = abbreviation.into();
        check_name(&name)?;
        check_abbreviation(&abbreviation)?;
        check_pair(&name, &abbreviation)?;
        Ok(Self {
            art_type,
            name,
            abbreviation,
        })
    }

    /// Creates an art abbreviated by the first two characters of its name.
    pub fn with_derived_abbreviation(
        art_type: ArtType,
        name: impl Into<String>,
    ) -> Result<Self, ArtError> {
        let name = name.into();
        let abbreviation = derive_abbreviation(&name);
        Self::new(art_type, name, abbreviation)
    }

    /// Creates a Hermetic technique.
    pub fn technique(name: impl Into<String>) -> Result<Self, ArtError> {
        Self::with_derived_abbreviation(ArtType::TECHNIQUE, name)
    }

    /// Creates a Hermetic form.
    pub fn form(name: impl Into<String>) -> Result<Self, ArtError> {
        Self::with_derived_abbreviation(ArtType::FORM, name)
    }

    /// Starts a staged construction of an art of the given type.
    pub fn draft(art_type: ArtType) -> ArtDraft {
        ArtDraft::new(art_type)
    }

    pub fn art_type(&self) -> &ArtType {
        &self.art_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn is_technique(&self) -> bool {
        self.art_type.is_technique()
    }

    pub fn is_form(&self) -> bool {
        self.art_type.is_form()
    }

    /// True if `value` is this art's name or abbreviation.
    pub fn matches(&self, value: &str) -> bool {
        self.name == value || self.abbreviation == value
    }
}

impl Ord for Art {
    fn cmp(&self, other: &Self) -> Ordering {
        self.art_type
            .cmp(&other.art_type)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.abbreviation.cmp(&other.abbreviation))
    }
}

impl PartialOrd for Art {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Art {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Staged construction of an [`Art`] with write-once name and abbreviation.
#[derive(Clone, Debug)]
pub struct ArtDraft {
    art_type: ArtType,
    name: WriteOnce<String>,
    abbreviation: WriteOnce<String>,
}

impl ArtDraft {
    pub fn new(art_type: ArtType) -> Self {
        Self {
            art_type,
            name: WriteOnce::new("name"),
            abbreviation: WriteOnce::new("abbreviation"),
        }
    }

    /// Sets the name once.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, ArtError> {
        self.name.ensure_unset()?;
        let name = name.into();
        check_name(&name)?;
        self.name.set(name)?;
        Ok(self)
    }

    /// Sets the abbreviation once.
    pub fn set_abbreviation(
        &mut self,
        abbreviation: impl Into<String>,
    ) -> Result<&mut Self, ArtError> {
        self.abbreviation.ensure_unset()?;
        let abbreviation = abbreviation.into();
        check_abbreviation(&abbreviation)?;
        self.abbreviation.set(abbreviation)?;
        Ok(self)
    }

    /// Builds the art; a missing abbreviation is derived from the name.
    pub fn build(self) -> Result<Art, ArtError> {
        let name = self
            .name
            .into_inner()
            .ok_or(ArtError::MissingField { field: "name" })?;
        match self.abbreviation.into_inner() {
            Some(abbreviation) => Art::new(self.art_type, name, abbreviation),
            None => Art::with_derived_abbreviation(self.art_type, name),
        }
    }
}

fn check_name(name: &str) -> Result<(), ArtError> {
    if valid_name(name) {
        Ok(())
    } else {
        Err(ArtError::InvalidName {
            name: name.to_string(),
        })
    }
}

fn check_abbreviation(abbreviation: &str) -> Result<(), ArtError> {
    if valid_abbreviation(abbreviation) {
        Ok(())
    } else {
        Err(ArtError::InvalidAbbreviation {
            abbreviation: abbreviation.to_string(),
        })
    }
}

fn check_pair(name: &str, abbreviation: &str) -> Result<(), ArtError> {
    if abbreviation.chars().count() > name.chars().count() {
        return Err(ArtError::AbbreviationTooLong {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
        });
    }
    Ok(())
}
