//! Errors signalled by store operations.
//!
//! # Design
//! An empty collection on list and an unknown id on lookup are separate
//! variants because they carry different messages, but both are "not found"
//! to a caller (`is_not_found`). The `Display` text of each variant is the
//! message shown to API clients.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Which collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Todo,
}

impl Resource {
    /// Message for a list request on an empty collection.
    pub fn empty_message(self) -> &'static str {
        match self {
            Resource::User => "Aucun utilisateur trouvé",
            Resource::Todo => "Aucune tâche trouvée",
        }
    }

    /// Message for an id that matches no record.
    pub fn missing_message(self) -> &'static str {
        match self {
            Resource::User => "Utilisateur non trouvé",
            Resource::Todo => "Tâche non trouvée",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User => write!(f, "user"),
            Resource::Todo => write!(f, "todo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The collection holds no record at all.
    #[error("{}", .0.empty_message())]
    Empty(Resource),

    /// No record carries the requested id.
    #[error("{}", .0.missing_message())]
    NotFound(Resource),

    /// The create payload broke one or more field rules.
    #[error("Erreur de validation")]
    Validation(ValidationErrors),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Empty(_) | StoreError::NotFound(_))
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(errors)
    }
}
