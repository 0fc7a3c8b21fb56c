//! Reference templates for guideline text.
//!
//! A reference renders either generically, as a human-readable description of
//! what it stands for, or specialized to a casting level. [`ReferenceSequence`]
//! strings literal text and references together and has a text form with
//! `{level}`, `{level+N}` and `{level-N}` placeholders; `{{` and `}}` escape
//! braces.

use std::fmt;
use std::str::FromStr;

use super::TemplateError;
use super::magnitude::{MODIFIER_LIMIT, shift_level};

/// Something that renders generically or at a level.
pub trait ReferenceTemplate {
    /// Rendering when no level is known.
    ///
    /// Never consults the magnitude ladder.
    fn generic(&self) -> String;

    /// Rendering specialized to `level`.
    fn at_level(&self, level: i16) -> Result<String, TemplateError>;

    /// Renders at `level` when given, generically otherwise.
    fn render(&self, level: Option<i16>) -> Result<String, TemplateError> {
        match level {
            Some(level) => self.at_level(level),
            None => Ok(self.generic()),
        }
    }
}

/// The casting level itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LevelReference;

impl ReferenceTemplate for LevelReference {
    fn generic(&self) -> String {
        "level".to_string()
    }

    fn at_level(&self, level: i16) -> Result<String, TemplateError> {
        Ok(level.to_string())
    }
}

/// The casting level moved by a number of magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct MagnitudeReference {
    modifier: i16,
}

impl MagnitudeReference {
    /// Creates a reference; the modifier must lie within ±[`MODIFIER_LIMIT`].
    pub fn new(modifier: i32) -> Result<Self, TemplateError> {
        let limit = i32::from(MODIFIER_LIMIT);
        if !(-limit..=limit).contains(&modifier) {
            return Err(TemplateError::ModifierOutOfRange { modifier });
        }
        Ok(Self {
            modifier: modifier as i16,
        })
    }

    pub fn modifier(&self) -> i16 {
        self.modifier
    }

    /// The level this reference stands for at casting level `level`.
    pub fn level_at(&self, level: i16) -> Result<i16, TemplateError> {
        shift_level(level, self.modifier)
    }
}

impl ReferenceTemplate for MagnitudeReference {
    fn generic(&self) -> String {
        let sign = if self.modifier < 0 { '-' } else { '+' };
        format!("(level {} {})", sign, self.modifier.unsigned_abs())
    }

    fn at_level(&self, level: i16) -> Result<String, TemplateError> {
        self.level_at(level).map(|level| level.to_string())
    }
}

impl TryFrom<i32> for MagnitudeReference {
    type Error = TemplateError;

    fn try_from(modifier: i32) -> Result<Self, Self::Error> {
        Self::new(modifier)
    }
}

impl From<MagnitudeReference> for i32 {
    fn from(reference: MagnitudeReference) -> Self {
        i32::from(reference.modifier)
    }
}

/// A [`MagnitudeReference`] with optional literal text around it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SequenceWithMagnitudeReference {
    prefix: Option<String>,
    reference: MagnitudeReference,
    suffix: Option<String>,
}

impl SequenceWithMagnitudeReference {
    pub fn new(reference: MagnitudeReference) -> Self {
        Self {
            prefix: None,
            reference,
            suffix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn reference(&self) -> &MagnitudeReference {
        &self.reference
    }

    /// Wraps `replacement` in the prefix and suffix.
    ///
    /// Without a replacement the fully generic rendering is returned.
    pub fn compose(&self, replacement: Option<&str>) -> String {
        match replacement {
            Some(value) => {
                let mut out = String::new();
                out.push_str(self.prefix.as_deref().unwrap_or_default());
                out.push_str(value);
                out.push_str(self.suffix.as_deref().unwrap_or_default());
                out
            }
            None => self.generic(),
        }
    }
}

impl ReferenceTemplate for SequenceWithMagnitudeReference {
    fn generic(&self) -> String {
        self.compose(Some(&self.reference.generic()))
    }

    fn at_level(&self, level: i16) -> Result<String, TemplateError> {
        let value = self.reference.at_level(level)?;
        Ok(self.compose(Some(&value)))
    }
}

/// Any of the known references.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reference {
    Level(LevelReference),
    Magnitude(MagnitudeReference),
    Sequence(SequenceWithMagnitudeReference),
}

impl ReferenceTemplate for Reference {
    fn generic(&self) -> String {
        match self {
            Self::Level(reference) => reference.generic(),
            Self::Magnitude(reference) => reference.generic(),
            Self::Sequence(reference) => reference.generic(),
        }
    }

    fn at_level(&self, level: i16) -> Result<String, TemplateError> {
        match self {
            Self::Level(reference) => reference.at_level(level),
            Self::Magnitude(reference) => reference.at_level(level),
            Self::Sequence(reference) => reference.at_level(level),
        }
    }
}

impl From<LevelReference> for Reference {
    fn from(reference: LevelReference) -> Self {
        Self::Level(reference)
    }
}

impl From<MagnitudeReference> for Reference {
    fn from(reference: MagnitudeReference) -> Self {
        Self::Magnitude(reference)
    }
}

impl From<SequenceWithMagnitudeReference> for Reference {
    fn from(reference: SequenceWithMagnitudeReference) -> Self {
        Self::Sequence(reference)
    }
}

/// One piece of a [`ReferenceSequence`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplatePart {
    Text(String),
    Reference(Reference),
}

/// Literal text and references rendered in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ReferenceSequence {
    parts: Vec<TemplatePart>,
}

impl ReferenceSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding only literal text.
    pub fn literal(text: impl Into<String>) -> Self {
        let mut sequence = Self::new();
        sequence.push_text(text);
        sequence
    }

    /// Appends literal text, merging it into a preceding text part.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        match self.parts.last_mut() {
            Some(TemplatePart::Text(last)) => last.push_str(&text),
            _ => self.parts.push(TemplatePart::Text(text)),
        }
        self
    }

    pub fn push_reference(&mut self, reference: impl Into<Reference>) -> &mut Self {
        self.parts.push(TemplatePart::Reference(reference.into()));
        self
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parses the placeholder syntax.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut sequence = Self::new();
        let mut text = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    text.push('{');
                }
                '{' => {
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(inner);
                    }
                    if !closed {
                        return Err(TemplateError::UnclosedPlaceholder { position });
                    }
                    sequence.push_text(std::mem::take(&mut text));
                    sequence.push_reference(parse_placeholder(&placeholder)?);
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    text.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedBrace { position }),
                _ => text.push(c),
            }
        }
        sequence.push_text(text);
        Ok(sequence)
    }
}

fn parse_placeholder(placeholder: &str) -> Result<Reference, TemplateError> {
    let compact: String = placeholder.chars().filter(|c| !c.is_whitespace()).collect();
    let unknown = || TemplateError::UnknownPlaceholder {
        placeholder: placeholder.to_string(),
    };
    let Some(rest) = compact.strip_prefix("level") else {
        return Err(unknown());
    };
    if rest.is_empty() {
        return Ok(LevelReference.into());
    }
    if !rest.starts_with(['+', '-']) {
        return Err(unknown());
    }
    let modifier: i32 = rest.parse().map_err(|_| unknown())?;
    Ok(MagnitudeReference::new(modifier)?.into())
}

impl ReferenceTemplate for ReferenceSequence {
    fn generic(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                TemplatePart::Text(text) => text.clone(),
                TemplatePart::Reference(reference) => reference.generic(),
            })
            .collect()
    }

    fn at_level(&self, level: i16) -> Result<String, TemplateError> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => out.push_str(text),
                TemplatePart::Reference(reference) => out.push_str(&reference.at_level(level)?),
            }
        }
        Ok(out)
    }
}

impl FromStr for ReferenceSequence {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ReferenceSequence {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ReferenceSequence> for String {
    fn from(sequence: ReferenceSequence) -> Self {
        sequence.to_string()
    }
}

/// Writes the placeholder syntax accepted by [`ReferenceSequence::parse`].
impl fmt::Display for ReferenceSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => write_escaped(f, text)?,
                TemplatePart::Reference(Reference::Level(_)) => f.write_str("{level}")?,
                TemplatePart::Reference(Reference::Magnitude(reference)) => {
                    write_magnitude(f, reference)?
                }
                TemplatePart::Reference(Reference::Sequence(sequence)) => {
                    write_escaped(f, sequence.prefix().unwrap_or_default())?;
                    write_magnitude(f, sequence.reference())?;
                    write_escaped(f, sequence.suffix().unwrap_or_default())?;
                }
            }
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '{' => f.write_str("{{")?,
            '}' => f.write_str("}}")?,
            _ => write!(f, "{}", c)?,
        }
    }
    Ok(())
}

fn write_magnitude(f: &mut fmt::Formatter<'_>, reference: &MagnitudeReference) -> fmt::Result {
    write!(f, "{{level{:+}}}", reference.modifier())
}
