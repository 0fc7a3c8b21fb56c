//! Level ↔ magnitude ladder.
//!
//! Magnitude 0 is level 4, the base guideline level. Levels 0..=4 map one to
//! one onto magnitudes -4..=0; above that each magnitude covers five levels,
//! rounding partial steps up. Negative levels and deep negative magnitudes are
//! reflected through the same ladder.
//!
//! The ladder is exact only where it is aligned: `level_to_magnitude` inverts
//! `magnitude_to_level` for every magnitude ≥ -4, and `magnitude_to_level`
//! inverts `level_to_magnitude` for levels 0..=4 and multiples of five. Elsewhere
//! a round trip snaps to the next ladder rung (e.g. level 7 → magnitude 2 →
//! level 10), and the reflections below magnitude -4 do not round-trip at all.
//!
//! All arithmetic is done in `i32`; results are narrowed back to `i16` and an
//! out-of-range level is reported instead of wrapping.

use super::TemplateError;
use crate::config::DesignerConfig;

const BASE: i32 = DesignerConfig::BASE_GUIDELINE_LEVEL as i32;
const STEP: i32 = DesignerConfig::LEVELS_PER_MAGNITUDE as i32;

/// Largest magnitude (in absolute value) any 16-bit level maps to:
/// `level_to_magnitude(i16::MIN)`.
const MAGNITUDE_SPAN: i16 = 6558;

/// Bound on magnitude modifiers so that `level_to_magnitude(L) + modifier`
/// never overflows an `i16`.
pub const MODIFIER_LIMIT: i16 = i16::MAX - MAGNITUDE_SPAN;

/// Magnitude of a level.
pub fn level_to_magnitude(level: i16) -> i16 {
    // |result| <= MAGNITUDE_SPAN for every i16 input.
    wide_level_to_magnitude(i32::from(level)) as i16
}

/// Level of a magnitude, or an error if it falls outside the `i16` range.
pub fn magnitude_to_level(magnitude: i16) -> Result<i16, TemplateError> {
    narrow(i32::from(magnitude), wide_magnitude_to_level(i32::from(magnitude)))
}

/// Moves `level` by `modifier` whole magnitudes.
pub fn shift_level(level: i16, modifier: i16) -> Result<i16, TemplateError> {
    let magnitude = wide_level_to_magnitude(i32::from(level)) + i32::from(modifier);
    narrow(magnitude, wide_magnitude_to_level(magnitude))
}

fn wide_level_to_magnitude(level: i32) -> i32 {
    if level > BASE {
        level / STEP + i32::from(level % STEP != 0)
    } else if level < 0 {
        -BASE - wide_level_to_magnitude(-level)
    } else {
        level - BASE
    }
}

fn wide_magnitude_to_level(magnitude: i32) -> i32 {
    if magnitude <= -8 {
        -STEP * wide_magnitude_to_level(9 - magnitude)
    } else if magnitude < 1 {
        BASE + magnitude
    } else {
        magnitude * STEP
    }
}

fn narrow(magnitude: i32, level: i32) -> Result<i16, TemplateError> {
    i16::try_from(level).map_err(|_| TemplateError::LevelOutOfRange { magnitude, level })
}
