//! In-memory record stores.
//!
//! # Design
//! `UserStore` and `TodoStore` share the same shape, so the ordered sequence
//! and id bookkeeping live in `Collection`. Each store keeps its own
//! validation, field mapping and delete result on top of it.
//!
//! Ids come from a counter that starts at the highest seeded id. As long as
//! nothing has been deleted this is exactly `len() + 1`; after a deletion it
//! keeps issuing fresh ids instead of reusing one still held by a record.

mod todo;
mod user;

pub use todo::TodoStore;
pub use user::UserStore;

use crate::types::{RecordId, Todo, User};

/// A record addressable by id.
pub trait Record {
    fn id(&self) -> RecordId;
}

impl Record for User {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Todo {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Insertion-ordered sequence of records with sequential id assignment.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    last_id: RecordId,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn from_records(records: Vec<T>) -> Self {
        let last_id = records
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(0)
            .max(records.len() as RecordId);
        Self { records, last_id }
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Reserve the id for the next inserted record.
    pub fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        self.last_id
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Remove and return the first record with `id`.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
