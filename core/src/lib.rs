//! Users and todos: records, create-time validation and in-memory stores.
//!
//! # Overview
//! Two independent collections with the same five operations (list, get,
//! create, update, delete). Everything here is synchronous and free of I/O;
//! the HTTP layer owns the stores and decides how to share them.
//!
//! # Design
//! - `UserStore` / `TodoStore` each own a `Collection` of their records.
//! - Create runs the payload through `Validate` first and mutates nothing on
//!   failure. Update copies its input verbatim and is never validated.
//! - Users are deleted silently; a deleted todo is returned to the caller.
//! - Failures are `StoreError` values whose `Display` is the client message.

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{Resource, StoreError};
pub use store::{Collection, Record, TodoStore, UserStore};
pub use types::{CreateTodo, CreateUser, RecordId, Todo, UpdateTodo, UpdateUser, User};
pub use validation::{FieldError, Validate, ValidationErrors};
