//! Index keys for guideline lookup.

use std::cmp::Ordering;
use std::fmt;

use super::level::GuidelineLevel;

/// Lookup key of a guideline bucket: raw technique, form and level strings.
///
/// Equality and hashing are field-wise. Ordering is the legacy key comparator
/// exposed by [`GuidelineKey::compare`]; it is deliberately not an [`Ord`]
/// implementation because it is not a total order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuidelineKey {
    technique: Option<String>,
    form: Option<String>,
    level: Option<String>,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

impl GuidelineKey {
    pub fn new(technique: Option<&str>, form: Option<&str>, level: Option<&str>) -> Self {
        Self {
            technique: technique.map(str::to_owned),
            form: form.map(str::to_owned),
            level: level.map(str::to_owned),
        }
    }

    pub fn technique(&self) -> Option<&str> {
        self.technique.as_deref()
    }

    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    /// True when any of the three fields is missing or empty.
    pub fn has_blank_field(&self) -> bool {
        is_blank(self.technique()) || is_blank(self.form()) || is_blank(self.level())
    }

    /// The legacy key comparator.
    ///
    /// Fields are visited in technique, form, level order and a field only
    /// contributes when it is blank (missing or empty) on *both* sides;
    /// otherwise it counts as equal. Missing sorts before empty, and blank
    /// levels both read as Generic. The upshot is that any two fully populated
    /// keys compare equal, and the relation is not transitive.
    pub fn compare(&self, other: &Self) -> Ordering {
        let technique = || {
            if is_blank(self.technique()) && is_blank(other.technique()) {
                self.technique.cmp(&other.technique)
            } else {
                Ordering::Equal
            }
        };
        let form = || {
            if is_blank(self.form()) && is_blank(other.form()) {
                self.form.cmp(&other.form)
            } else {
                Ordering::Equal
            }
        };
        let level = || {
            if is_blank(self.level()) && is_blank(other.level()) {
                let parse = |level| GuidelineLevel::parse(level).unwrap_or_default();
                parse(self.level()).cmp(&parse(other.level()))
            } else {
                Ordering::Equal
            }
        };
        technique().then_with(form).then_with(level)
    }
}

impl From<(&str, &str, &str)> for GuidelineKey {
    fn from((technique, form, level): (&str, &str, &str)) -> Self {
        Self::new(Some(technique), Some(form), Some(level))
    }
}

impl fmt::Display for GuidelineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.technique().unwrap_or_default(),
            self.form().unwrap_or_default(),
            self.level().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_keys_all_compare_equal() {
        let creo = GuidelineKey::from(("Creo", "Ignem", "5"));
        let rego = GuidelineKey::from(("Rego", "Vim", "10"));
        assert_eq!(creo.compare(&rego), Ordering::Equal);
        assert_eq!(rego.compare(&creo), Ordering::Equal);
        assert_ne!(creo, rego);
    }

    #[test]
    fn missing_sorts_before_empty() {
        let missing = GuidelineKey::new(None, Some("Ignem"), Some("5"));
        let empty = GuidelineKey::new(Some(""), Some("Ignem"), Some("5"));
        assert_eq!(missing.compare(&empty), Ordering::Less);
        assert_eq!(empty.compare(&missing), Ordering::Greater);
    }

    #[test]
    fn half_blank_fields_are_ignored() {
        let blank = GuidelineKey::new(None, Some("Ignem"), Some("5"));
        let full = GuidelineKey::from(("Creo", "Ignem", "5"));
        assert_eq!(blank.compare(&full), Ordering::Equal);
    }

    #[test]
    fn comparator_is_not_transitive() {
        let missing = GuidelineKey::new(None, None, None);
        let full = GuidelineKey::from(("Creo", "Ignem", "5"));
        let empty = GuidelineKey::new(Some(""), None, None);
        assert_eq!(missing.compare(&full), Ordering::Equal);
        assert_eq!(full.compare(&empty), Ordering::Equal);
        assert_eq!(missing.compare(&empty), Ordering::Less);
    }

    #[test]
    fn blank_levels_read_as_generic() {
        let missing = GuidelineKey::new(Some("Creo"), Some("Ignem"), None);
        let empty = GuidelineKey::new(Some("Creo"), Some("Ignem"), Some(""));
        assert_eq!(missing.compare(&empty), Ordering::Equal);
        assert_eq!(empty.compare(&missing), Ordering::Equal);
        assert!(missing.has_blank_field());
        assert!(!GuidelineKey::from(("Creo", "Ignem", "Generic")).has_blank_field());
    }

    #[test]
    fn display_joins_fields() {
        let key = GuidelineKey::new(Some("Creo"), None, Some("10"));
        assert_eq!(key.to_string(), "Creo//10");
    }
}
