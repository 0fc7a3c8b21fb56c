//! Spell guidelines.

use std::cmp::Ordering;
use std::fmt;

use super::GuidelineError;
use super::level::GuidelineLevel;
use super::template::{ReferenceSequence, ReferenceTemplate};
use crate::arts::Art;
use crate::once::WriteOnce;

/// Tests a guideline name: non-empty, no surrounding whitespace, and no period
/// (periods separate the name from the description when rendered).
pub fn valid_guideline_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name && !name.contains('.')
}

/// A named, leveled description of a class of effect for one Technique and one
/// Form.
///
/// Renders as `CrIg10: Name. Description`, with the description specialized to
/// the guideline's level (or generic for a Generic guideline).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpellGuideline {
    technique: Art,
    form: Art,
    level: GuidelineLevel,
    name: String,
    description: Option<ReferenceSequence>,
}

impl SpellGuideline {
    pub fn builder() -> SpellGuidelineBuilder {
        SpellGuidelineBuilder::new()
    }

    pub fn technique(&self) -> &Art {
        &self.technique
    }

    pub fn form(&self) -> &Art {
        &self.form
    }

    pub fn level(&self) -> GuidelineLevel {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&ReferenceSequence> {
        self.description.as_ref()
    }

    /// The description rendered at the guideline's level.
    pub fn rendered_description(&self) -> Option<String> {
        // Checked renderable when the guideline was built.
        self.description
            .as_ref()
            .map(|description| render_at(description, self.level).unwrap_or_default())
    }
}

fn render_at(
    description: &ReferenceSequence,
    level: GuidelineLevel,
) -> Result<String, GuidelineError> {
    Ok(description.render(level.value())?)
}

impl Ord for SpellGuideline {
    fn cmp(&self, other: &Self) -> Ordering {
        self.technique
            .cmp(&other.technique)
            .then_with(|| self.form.cmp(&other.form))
            .then_with(|| self.level.cmp(&other.level))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| {
                self.description
                    .as_ref()
                    .map(ToString::to_string)
                    .cmp(&other.description.as_ref().map(ToString::to_string))
            })
    }
}

impl PartialOrd for SpellGuideline {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SpellGuideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}: {}.",
            self.technique.abbreviation(),
            self.form.abbreviation(),
            self.level,
            self.name
        )?;
        if let Some(description) = self.rendered_description() {
            write!(f, " {}", description)?;
        }
        Ok(())
    }
}

/// Staged construction of a [`SpellGuideline`]; every field is write-once.
#[derive(Clone, Debug)]
pub struct SpellGuidelineBuilder {
    technique: WriteOnce<Art>,
    form: WriteOnce<Art>,
    level: WriteOnce<GuidelineLevel>,
    name: WriteOnce<String>,
    description: WriteOnce<ReferenceSequence>,
}

impl SpellGuidelineBuilder {
    pub fn new() -> Self {
        Self {
            technique: WriteOnce::new("technique"),
            form: WriteOnce::new("form"),
            level: WriteOnce::new("level"),
            name: WriteOnce::new("name"),
            description: WriteOnce::new("description"),
        }
    }

    pub fn technique(&mut self, technique: Art) -> Result<&mut Self, GuidelineError> {
        self.technique.ensure_unset()?;
        if !technique.is_technique() {
            return Err(GuidelineError::NotATechnique {
                art: technique.name().to_string(),
            });
        }
        self.technique.set(technique)?;
        Ok(self)
    }

    pub fn form(&mut self, form: Art) -> Result<&mut Self, GuidelineError> {
        self.form.ensure_unset()?;
        if !form.is_form() {
            return Err(GuidelineError::NotAForm {
                art: form.name().to_string(),
            });
        }
        self.form.set(form)?;
        Ok(self)
    }

    pub fn level(&mut self, level: GuidelineLevel) -> Result<&mut Self, GuidelineError> {
        self.level.set(level)?;
        Ok(self)
    }

    pub fn name(&mut self, name: impl Into<String>) -> Result<&mut Self, GuidelineError> {
        self.name.ensure_unset()?;
        let name = name.into();
        if !valid_guideline_name(&name) {
            return Err(GuidelineError::InvalidName { name });
        }
        self.name.set(name)?;
        Ok(self)
    }

    pub fn description(
        &mut self,
        description: ReferenceSequence,
    ) -> Result<&mut Self, GuidelineError> {
        self.description.set(description)?;
        Ok(self)
    }

    /// Parses and sets the description from placeholder text.
    pub fn description_text(&mut self, text: &str) -> Result<&mut Self, GuidelineError> {
        self.description.ensure_unset()?;
        let description = ReferenceSequence::parse(text)?;
        self.description(description)
    }

    /// Builds the guideline.
    ///
    /// Technique, form and name are required; a missing level means Generic.
    /// Fails if the description cannot be rendered at the level.
    pub fn build(self) -> Result<SpellGuideline, GuidelineError> {
        let technique = self
            .technique
            .into_inner()
            .ok_or(GuidelineError::MissingField { field: "technique" })?;
        let form = self
            .form
            .into_inner()
            .ok_or(GuidelineError::MissingField { field: "form" })?;
        let name = self
            .name
            .into_inner()
            .ok_or(GuidelineError::MissingField { field: "name" })?;
        let level = self.level.into_inner().unwrap_or_default();
        let description = self.description.into_inner();
        if let Some(description) = &description {
            render_at(description, level)?;
        }
        Ok(SpellGuideline {
            technique,
            form,
            level,
            name,
            description,
        })
    }
}

impl Default for SpellGuidelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
