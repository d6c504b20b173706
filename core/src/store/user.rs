use crate::error::{Resource, StoreError};
use crate::store::Collection;
use crate::types::{CreateUser, RecordId, UpdateUser, User};
use crate::validation::Validate;

/// Owner of the user collection.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Collection<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: Collection::from_records(users),
        }
    }

    /// The two users the service starts with.
    pub fn seeded() -> Self {
        Self::from_users(vec![
            User::new(1, "Marie", "marie@email.com"),
            User::new(2, "Pierre", "pierre@email.com"),
        ])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Every user in insertion order. An empty collection is an error.
    pub fn list(&self) -> Result<&[User], StoreError> {
        if self.users.is_empty() {
            tracing::info!("{}", Resource::User.empty_message());
            return Err(StoreError::Empty(Resource::User));
        }
        Ok(self.users.all())
    }

    pub fn get(&self, id: RecordId) -> Result<&User, StoreError> {
        self.users.find(id).ok_or_else(|| {
            tracing::info!(id, "{}", Resource::User.missing_message());
            StoreError::NotFound(Resource::User)
        })
    }

    /// Validate `input` and append a new user. `name` is stored trimmed.
    pub fn create(&mut self, input: CreateUser) -> Result<User, StoreError> {
        input.validate()?;

        let user = User {
            id: self.users.next_id(),
            name: input.name.map(|n| n.trim().to_string()),
            email: input.email,
        };
        self.users.push(user.clone());
        tracing::debug!(id = user.id, "user created");
        Ok(user)
    }

    /// Overwrite both fields of user `id`, including with absent values.
    pub fn update(&mut self, id: RecordId, input: UpdateUser) -> Result<User, StoreError> {
        let user = self
            .users
            .find_mut(id)
            .ok_or(StoreError::NotFound(Resource::User))?;
        user.name = input.name;
        user.email = input.email;
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        self.users
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(Resource::User))
    }
}
