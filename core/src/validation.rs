//! Field-level validation applied to create payloads.
//!
//! # Design
//! Every rule of a payload is checked; nothing short-circuits. Violations are
//! kept in rule order so the client sees them in the same order the fields
//! are declared. Each violation is logged as it is recorded.

use serde::Serialize;
use validator::ValidateEmail;

use crate::types::{CreateTodo, CreateUser};

/// Message attached to every violated rule.
pub const INVALID_VALUE: &str = "Invalid value";

/// One violated rule on one body field.
///
/// Serialized as `{"type":"field","value":..,"msg":..,"path":..,"location":"body"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    kind: &'static str,
    /// The rejected value, absent when the field was not sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "msg")]
    pub message: String,
    #[serde(rename = "path")]
    pub field: String,
    location: &'static str,
}

impl FieldError {
    pub fn new(field: &str, value: Option<&str>) -> Self {
        Self {
            kind: "field",
            value: value.map(str::to_string),
            message: INVALID_VALUE.to_string(),
            field: field.to_string(),
            location: "body",
        }
    }
}

/// Ordered list of violations for one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: FieldError) {
        tracing::warn!(field = %error.field, "{}: {}", error.field, error.message);
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Field names in the order their violations were recorded.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Contract check run before a create operation.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_present(self.name.as_deref()) {
            errors.add(FieldError::new("name", self.name.as_deref()));
        }
        if !is_email(self.email.as_ref()) {
            errors.add(FieldError::new("email", self.email.as_deref()));
        }
        errors.into_result()
    }
}

impl Validate for CreateTodo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_present(self.title.as_deref()) {
            errors.add(FieldError::new("title", self.title.as_deref()));
        }
        errors.into_result()
    }
}

/// Non-empty once surrounding whitespace is removed.
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn is_email(value: Option<&String>) -> bool {
    match value {
        Some(email) => email.validate_email(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: Option<&str>) -> CreateUser {
        CreateUser {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(user(Some("Marie"), Some("marie@email.com")).validate().is_ok());
    }

    #[test]
    fn empty_name_and_bad_email_report_both_in_order() {
        let errors = user(Some(""), Some("bad")).validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["name", "email"]);
        assert!(errors.iter().all(|e| e.message == INVALID_VALUE));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let errors = user(Some("   "), Some("a@b.fr")).validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["name"]);
    }

    #[test]
    fn missing_fields_are_rejected_without_value() {
        let errors = user(None, None).validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn email_shapes() {
        for bad in ["", "plainaddress", "@no-local.fr", "two@@signs.fr", "no-domain@"] {
            assert!(!is_email(Some(&bad.to_string())), "{bad} should be rejected");
        }
        for good in ["pierre@email.com", "first.last+tag@sub.example.org"] {
            assert!(is_email(Some(&good.to_string())), "{good} should be accepted");
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let input = CreateTodo {
            title: Some("\t \n".to_string()),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["title"]);
    }

    #[test]
    fn field_error_wire_shape() {
        let json = serde_json::to_value(FieldError::new("email", Some("bad"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "field",
                "value": "bad",
                "msg": "Invalid value",
                "path": "email",
                "location": "body"
            })
        );

        let json = serde_json::to_value(FieldError::new("title", None)).unwrap();
        assert!(json.get("value").is_none());
    }
}
