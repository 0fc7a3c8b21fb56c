//! Art types and their ordering.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use super::ArtError;
use super::names::valid_name;
use crate::config::DesignerConfig;

/// Axis of an art type.
///
/// The declaration order is the tie-break rank inside a key: techniques sort
/// before forms, forms before special types.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtCategory {
    /// Used as a verb.
    Technique,
    /// Used as a noun.
    Form,
    /// Neither technique nor form.
    Special,
}

/// Classification tag of an art.
///
/// Ordered by `key`, then category rank, then `name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArtType {
    key: Cow<'static, str>,
    name: Cow<'static, str>,
    category: ArtCategory,
}

impl ArtType {
    /// The Hermetic technique type.
    pub const TECHNIQUE: ArtType = ArtType {
        key: Cow::Borrowed(DesignerConfig::HERMETIC_KEY),
        name: Cow::Borrowed("Technique"),
        category: ArtCategory::Technique,
    };

    /// The Hermetic form type.
    pub const FORM: ArtType = ArtType {
        key: Cow::Borrowed(DesignerConfig::HERMETIC_KEY),
        name: Cow::Borrowed("Form"),
        category: ArtCategory::Form,
    };

    /// Creates an art type; the name must be a valid art name.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        category: ArtCategory,
    ) -> Result<Self, ArtError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ArtError::InvalidTypeKey { key });
        }
        let name = name.into();
        if !valid_name(&name) {
            return Err(ArtError::InvalidTypeName { name });
        }
        Ok(Self {
            key: Cow::Owned(key),
            name: Cow::Owned(name),
            category,
        })
    }

    /// Grouping namespace, e.g. "Hermetic".
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ArtCategory {
        self.category
    }

    pub fn is_technique(&self) -> bool {
        self.category == ArtCategory::Technique
    }

    pub fn is_form(&self) -> bool {
        self.category == ArtCategory::Form
    }
}

impl Ord for ArtType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.category.cmp(&other.category))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ArtType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ArtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
