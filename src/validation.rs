use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r".+@.+\..+").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// One failure recorded against a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFailure {
    pub message: Option<String>,
    /// Descriptor data some validators attach; may carry its own message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

impl FieldFailure {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            message: Some(msg.into()),
            properties: None,
        }
    }
}

/// Structured validation failure: field name to every failure seen for it.
pub type ValidationErrors = BTreeMap<String, Vec<FieldFailure>>;

/// Accumulates failures while an entity validator runs.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(FieldFailure::message(message));
    }

    /// Records a failure unless the value is a non-empty string.
    pub fn require<'a>(
        &mut self,
        field: &str,
        value: &'a Option<String>,
        message: &str,
    ) -> Option<&'a str> {
        match value.as_deref() {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.fail(field, message);
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Flattens a structured failure into a single message per field.
pub fn normalize(errors: &ValidationErrors) -> BTreeMap<String, String> {
    serde_json::to_value(errors)
        .map(|value| normalize_value(&value))
        .unwrap_or_default()
}

/// Flattens descriptor data of unknown shape into one message per field.
///
/// Prefers the explicit message, then a nested `properties.message`, then a
/// stringified descriptor. Absent or malformed input yields an empty map,
/// never a panic.
pub fn normalize_value(value: &Value) -> BTreeMap<String, String> {
    let Some(fields) = value.as_object() else {
        return BTreeMap::new();
    };

    fields
        .iter()
        .filter_map(|(field, descriptor)| {
            // A field may map to one descriptor or a list of them.
            let first = match descriptor {
                Value::Array(items) => items.first()?,
                other => other,
            };
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .or_else(|| nested_message(first.get("properties")?))
                .unwrap_or_else(|| first.to_string());
            Some((field.clone(), message))
        })
        .collect()
}

fn nested_message(properties: &Value) -> Option<String> {
    properties
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_format() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn validator_collects_and_finishes() {
        let mut v = Validator::new();
        let present = Some("value".to_string());
        let empty = Some(String::new());
        assert_eq!(v.require("a", &present, "A is required"), Some("value"));
        assert_eq!(v.require("b", &None, "B is required"), None);
        assert_eq!(v.require("c", &empty, "C is required"), None);

        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors["b"][0].message.as_deref(),
            Some("B is required")
        );
    }

    #[test]
    fn normalize_prefers_explicit_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(
            "email".to_string(),
            vec![FieldFailure {
                message: Some("Email is required".to_string()),
                properties: Some(json!({ "message": "shadowed" })),
            }],
        );
        let flat = normalize(&errors);
        assert_eq!(flat["email"], "Email is required");
    }

    #[test]
    fn normalize_falls_back_to_nested_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(
            "phone".to_string(),
            vec![FieldFailure {
                message: None,
                properties: Some(json!({ "message": "Phone is required" })),
            }],
        );
        let flat = normalize(&errors);
        assert_eq!(flat["phone"], "Phone is required");
    }

    #[test]
    fn normalize_stringifies_when_no_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(
            "state".to_string(),
            vec![FieldFailure {
                message: None,
                properties: Some(json!({ "kind": "required" })),
            }],
        );
        let flat = normalize(&errors);
        assert!(flat["state"].contains("required"));
    }

    #[test]
    fn normalize_skips_fields_without_failures() {
        let mut errors = ValidationErrors::new();
        errors.insert("ghost".to_string(), vec![]);
        assert!(normalize(&errors).is_empty());
    }

    #[test]
    fn normalize_value_handles_shapes() {
        let flat = normalize_value(&json!({
            "email": { "message": "Email is required" },
            "phone": { "properties": { "message": "Phone is required" } },
            "state": [{ "message": "State is required" }],
            "other": 42,
        }));
        assert_eq!(flat["email"], "Email is required");
        assert_eq!(flat["phone"], "Phone is required");
        assert_eq!(flat["state"], "State is required");
        assert_eq!(flat["other"], "42");
    }

    #[test]
    fn normalize_value_tolerates_malformed_input() {
        assert!(normalize_value(&Value::Null).is_empty());
        assert!(normalize_value(&json!("not an object")).is_empty());
        assert!(normalize_value(&json!([1, 2, 3])).is_empty());
        assert!(normalize_value(&json!({})).is_empty());
    }
}
