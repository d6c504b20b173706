use crate::error::{Resource, StoreError};
use crate::store::Collection;
use crate::types::{CreateTodo, RecordId, Todo, UpdateTodo};
use crate::validation::Validate;

/// Owner of the todo collection.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Collection<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Collection::from_records(todos),
        }
    }

    pub fn seeded() -> Self {
        Self::from_todos(vec![
            Todo::new(1, "Faire les courses", false),
            Todo::new(2, "Acheter du pain", true),
        ])
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn list(&self) -> Result<&[Todo], StoreError> {
        if self.todos.is_empty() {
            tracing::info!("{}", Resource::Todo.empty_message());
            return Err(StoreError::Empty(Resource::Todo));
        }
        Ok(self.todos.all())
    }

    pub fn get(&self, id: RecordId) -> Result<&Todo, StoreError> {
        self.todos.find(id).ok_or_else(|| {
            tracing::info!(id, "{}", Resource::Todo.missing_message());
            StoreError::NotFound(Resource::Todo)
        })
    }

    /// New todos always start with `completed: false`.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, StoreError> {
        input.validate()?;

        let todo = Todo {
            id: self.todos.next_id(),
            title: input.title.map(|t| t.trim().to_string()),
            completed: Some(false),
        };
        self.todos.push(todo.clone());
        tracing::debug!(id = todo.id, "todo created");
        Ok(todo)
    }

    pub fn update(&mut self, id: RecordId, input: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .find_mut(id)
            .ok_or(StoreError::NotFound(Resource::Todo))?;
        todo.title = input.title;
        todo.completed = input.completed;
        Ok(todo.clone())
    }

    /// Remove todo `id` and hand it back.
    pub fn delete(&mut self, id: RecordId) -> Result<Todo, StoreError> {
        self.todos
            .remove(id)
            .ok_or(StoreError::NotFound(Resource::Todo))
    }
}
