//! Guideline levels, which may be "Generic".

use core::fmt;
use core::str::FromStr;

use crate::config::DesignerConfig;
use crate::level::{Level, LevelError};

/// A [`Level`] whose absent state reads as `Generic`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct GuidelineLevel(Level);

impl GuidelineLevel {
    pub const GENERIC: GuidelineLevel = GuidelineLevel(Level::ABSENT);

    pub fn new(level: i32) -> Result<Self, LevelError> {
        Level::new(level).map(Self)
    }

    pub const fn is_generic(&self) -> bool {
        self.0.is_absent()
    }

    pub const fn value(&self) -> Option<i16> {
        self.0.value()
    }

    pub const fn level(&self) -> Level {
        self.0
    }

    /// Parses a guideline level.
    ///
    /// Missing input, the empty string and `Generic` (any case) all yield the
    /// generic level.
    pub fn parse(input: Option<&str>) -> Result<Self, LevelError> {
        match input {
            None | Some("") => Ok(Self::GENERIC),
            Some(text) if text.eq_ignore_ascii_case(DesignerConfig::GENERIC_LEVEL) => {
                Ok(Self::GENERIC)
            }
            Some(text) => Level::parse(Some(text)).map(Self),
        }
    }
}

impl Default for GuidelineLevel {
    fn default() -> Self {
        Self::GENERIC
    }
}

impl From<Level> for GuidelineLevel {
    fn from(level: Level) -> Self {
        Self(level)
    }
}

impl From<GuidelineLevel> for Level {
    fn from(level: GuidelineLevel) -> Self {
        level.0
    }
}

impl FromStr for GuidelineLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl TryFrom<String> for GuidelineLevel {
    type Error = LevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(Some(&value))
    }
}

impl From<GuidelineLevel> for String {
    fn from(level: GuidelineLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for GuidelineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_generic() {
            f.write_str(DesignerConfig::GENERIC_LEVEL)
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_inputs() {
        for input in [None, Some(""), Some("Generic"), Some("generic"), Some("GENERIC")] {
            let level = GuidelineLevel::parse(input).unwrap();
            assert!(level.is_generic());
            assert_eq!(level.to_string(), "Generic");
        }
    }

    #[test]
    fn numeric_levels() {
        let level: GuidelineLevel = "15".parse().unwrap();
        assert_eq!(level.value(), Some(15));
        assert_eq!(level.to_string(), "15");
    }

    #[test]
    fn generic_sorts_first() {
        let one = GuidelineLevel::new(1).unwrap();
        assert!(GuidelineLevel::GENERIC < one);
        assert_eq!(GuidelineLevel::default(), GuidelineLevel::GENERIC);
    }

    #[test]
    fn malformed_levels_fail() {
        assert!(matches!(
            "Genericish".parse::<GuidelineLevel>(),
            Err(LevelError::Malformed { .. })
        ));
        assert!(matches!(
            "-5".parse::<GuidelineLevel>(),
            Err(LevelError::InvalidLevel { level: -5 })
        ));
    }
}
