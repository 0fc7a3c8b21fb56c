//! Request bodies accepted by the designer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::{Result, RuntimeError};

/// JSON body of a guideline creation request.
///
/// ```json
/// { "name": "Create a fire", "description": "Heat as a torch, {level+1} to ignite" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl GuidelineRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parses a request body. The body must be a JSON object.
    pub fn from_json(body: &str) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_str(body).map_err(RuntimeError::InvalidBody)?;
        serde_json::from_value(Value::Object(object)).map_err(RuntimeError::InvalidBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_description() {
        let request =
            GuidelineRequest::from_json(r#"{"name": "Spark", "description": "{level}"}"#).unwrap();
        assert_eq!(request, GuidelineRequest::new("Spark").with_description("{level}"));
    }

    #[test]
    fn description_is_optional() {
        let request = GuidelineRequest::from_json(r#"{"name": "Spark"}"#).unwrap();
        assert_eq!(request.description, None);
    }

    #[test]
    fn rejects_non_string_fields() {
        for body in [
            r#"{"name": 5}"#,
            r#"{"description": "x"}"#,
            r#"{"name": "Spark", "description": 1}"#,
            r#"["Spark"]"#,
            r#""Spark""#,
            "not json",
        ] {
            assert!(matches!(
                GuidelineRequest::from_json(body),
                Err(RuntimeError::InvalidBody(_))
            ));
        }
    }

    #[test]
    fn array_bodies_are_not_requests() {
        let err = GuidelineRequest::from_json(r#"["Spark", "{level}"]"#).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidBody(_)));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let request = GuidelineRequest::from_json(r#"{"name": "Spark", "author": "Bonisagus"}"#)
            .unwrap();
        assert_eq!(request, GuidelineRequest::new("Spark"));
    }
}
