//! Art levels and the experience cost of changing them.
//!
//! A level is an optional integer in `[0, 32767]`. Raising a score by one point
//! costs the new score in experience, so moving from `start` to `end` costs the
//! arithmetic series between them; lowering refunds the same amount.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::config::DesignerConfig;
use crate::error::{ErrorKind, HermeticError};

/// Errors raised while validating or parsing levels.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("invalid level {level}")]
    InvalidLevel { level: i32 },

    #[error("invalid start level {level}")]
    InvalidStart { level: i32 },

    #[error("invalid end level {level}")]
    InvalidEnd { level: i32 },

    #[error("malformed level {input:?}")]
    Malformed { input: String },
}

impl HermeticError for LevelError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLevel { .. } => "LEVEL_INVALID",
            Self::InvalidStart { .. } => "LEVEL_INVALID_START",
            Self::InvalidEnd { .. } => "LEVEL_INVALID_END",
            Self::Malformed { .. } => "LEVEL_MALFORMED",
        }
    }
}

/// Tests the validity of a level.
pub const fn valid_level(level: i32) -> bool {
    level >= 0 && level <= DesignerConfig::MAX_LEVEL
}

/// Experience needed to move a score from `start` to `end`.
///
/// Negative when the level is lowered. For valid bounds the largest product,
/// `(0 + 32767) * 32768`, still fits in an `i32`.
pub fn experience_cost(start: i32, end: i32) -> Result<i32, LevelError> {
    if !valid_level(start) {
        return Err(LevelError::InvalidStart { level: start });
    }
    if !valid_level(end) {
        return Err(LevelError::InvalidEnd { level: end });
    }
    Ok(pyramid_cost(start, end))
}

fn pyramid_cost(start: i32, end: i32) -> i32 {
    if start < end {
        (start + end) * (end - start + 1) / 2
    } else if start > end {
        -pyramid_cost(end, start)
    } else {
        0
    }
}

/// A level that may be absent.
///
/// Absent compares equal to absent and below every present value; present
/// values compare numerically. The derived ordering of `Option` gives exactly
/// that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Option<i16>", into = "Option<i16>")
)]
pub struct Level(Option<i16>);

impl Level {
    pub const ABSENT: Level = Level(None);
    pub const ZERO: Level = Level(Some(0));

    /// Creates a present level.
    pub fn new(level: i32) -> Result<Self, LevelError> {
        if !valid_level(level) {
            return Err(LevelError::InvalidLevel { level });
        }
        Ok(Self(Some(level as i16)))
    }

    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the numeric value, if any.
    pub const fn value(&self) -> Option<i16> {
        self.0
    }

    /// Moves to `level` and returns the experience the change costs.
    ///
    /// The target is validated before anything is priced or stored. An absent
    /// level is priced as level 0.
    pub fn set_level(&mut self, level: i32) -> Result<i32, LevelError> {
        if !valid_level(level) {
            return Err(LevelError::InvalidLevel { level });
        }
        let current = self.0.map_or(0, i32::from);
        let cost = experience_cost(current, level)?;
        self.0 = Some(level as i16);
        Ok(cost)
    }

    /// Parses a level; missing or empty input yields an absent level.
    pub fn parse(input: Option<&str>) -> Result<Self, LevelError> {
        match input {
            None | Some("") => Ok(Self::ABSENT),
            Some(text) => parse_present(text).map(|value| Self(Some(value))),
        }
    }
}

/// Parses a decimal `i16` and checks it is a valid level.
fn parse_present(text: &str) -> Result<i16, LevelError> {
    let value: i16 = text.parse().map_err(|_| LevelError::Malformed {
        input: text.to_string(),
    })?;
    if !valid_level(i32::from(value)) {
        return Err(LevelError::InvalidLevel {
            level: i32::from(value),
        });
    }
    Ok(value)
}

impl Default for Level {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<i32> for Level {
    type Error = LevelError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl TryFrom<Option<i16>> for Level {
    type Error = LevelError;

    fn try_from(level: Option<i16>) -> Result<Self, Self::Error> {
        match level {
            None => Ok(Self::ABSENT),
            Some(value) => Self::new(i32::from(value)),
        }
    }
}

impl From<Level> for Option<i16> {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_level_bounds() {
        assert!(valid_level(0));
        assert!(valid_level(32767));
        assert!(!valid_level(-1));
        assert!(!valid_level(32768));
    }

    #[test]
    fn raising_costs_the_pyramid_and_lowering_refunds_it() {
        assert_eq!(experience_cost(0, 5), Ok(15));
        assert_eq!(experience_cost(5, 0), Ok(-15));
        assert_eq!(experience_cost(3, 3), Ok(0));
        // 6 + 7 + 8 + 9 + 10
        assert_eq!(experience_cost(6, 10), Ok(40));
    }

    #[test]
    fn cost_is_antisymmetric_over_a_range() {
        for a in 0..30 {
            for b in a..30 {
                let up = experience_cost(a, b).unwrap();
                assert!(up >= 0);
                assert_eq!(experience_cost(b, a).unwrap(), -up);
            }
        }
    }

    #[test]
    fn full_range_cost_does_not_overflow() {
        assert_eq!(experience_cost(0, 32767), Ok(536_854_528));
        assert_eq!(experience_cost(32767, 0), Ok(-536_854_528));
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        assert_eq!(
            experience_cost(-1, 5),
            Err(LevelError::InvalidStart { level: -1 })
        );
        assert_eq!(
            experience_cost(0, 40_000),
            Err(LevelError::InvalidEnd { level: 40_000 })
        );
    }

    #[test]
    fn set_level_returns_cost_and_adopts_value() {
        let mut level = Level::new(5).unwrap();
        assert_eq!(level.set_level(10), Ok(45));
        assert_eq!(level.value(), Some(10));
        assert_eq!(level.set_level(0), Ok(-55));
        assert_eq!(level.value(), Some(0));
    }

    #[test]
    fn set_level_rejects_invalid_target_without_change() {
        let mut level = Level::new(7).unwrap();
        assert!(level.set_level(-3).is_err());
        assert_eq!(level.value(), Some(7));
    }

    #[test]
    fn absent_level_is_priced_from_zero() {
        let mut level = Level::ABSENT;
        assert_eq!(level.set_level(5), Ok(15));
        assert!(!level.is_absent());
    }

    #[test]
    fn absent_sorts_below_present() {
        let zero = Level::new(0).unwrap();
        let nine = Level::new(9).unwrap();
        assert!(Level::ABSENT < zero);
        assert!(zero < nine);
        assert_eq!(Level::ABSENT.cmp(&Level::ABSENT), core::cmp::Ordering::Equal);
    }

    #[test]
    fn parse_and_render() {
        assert_eq!(Level::parse(None), Ok(Level::ABSENT));
        assert_eq!("".parse::<Level>(), Ok(Level::ABSENT));
        assert_eq!("15".parse::<Level>().unwrap().value(), Some(15));
        assert_eq!(Level::ABSENT.to_string(), "");
        assert_eq!(Level::new(20).unwrap().to_string(), "20");
    }

    #[test]
    fn parse_rejects_malformed_and_negative() {
        assert!(matches!(
            "abc".parse::<Level>(),
            Err(LevelError::Malformed { .. })
        ));
        assert!(matches!(
            "40000".parse::<Level>(),
            Err(LevelError::Malformed { .. })
        ));
        assert_eq!(
            "-2".parse::<Level>(),
            Err(LevelError::InvalidLevel { level: -2 })
        );
    }
}
