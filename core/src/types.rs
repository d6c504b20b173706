//! Records and request payloads for the users and todos collections.
//!
//! # Design
//! Mutable fields are `Option`s on the records themselves. A full update
//! copies every field from its input verbatim, so a field missing from the
//! request body ends up missing from the stored record; serialization then
//! omits it entirely instead of writing `null`.

use serde::{Deserialize, Serialize};

/// Identifier shared by both collections. Sequential, starting at 1.
pub type RecordId = u64;

/// A user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body of `POST /api/users`. Fields stay optional until validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `PUT /api/users/{id}`. Applied as-is, without validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /api/todos`. Any `completed` flag in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

/// Body of `PUT /api/todos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl User {
    pub fn new(id: RecordId, name: &str, email: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }
}

impl Todo {
    pub fn new(id: RecordId, title: &str, completed: bool) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            completed: Some(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_all_fields() {
        let user = User::new(1, "Marie", "marie@email.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Marie", "email": "marie@email.com"})
        );
    }

    #[test]
    fn missing_fields_are_omitted_not_null() {
        let todo = Todo {
            id: 4,
            title: None,
            completed: None,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":4}"#);
    }

    #[test]
    fn create_todo_ignores_completed() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","completed":true}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Done"));
    }

    #[test]
    fn update_inputs_accept_empty_object() {
        let input: UpdateTodo = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());

        let input: UpdateUser = serde_json::from_str(r#"{"email":"x@y.fr"}"#).unwrap();
        assert!(input.name.is_none());
        assert_eq!(input.email.as_deref(), Some("x@y.fr"));
    }
}
