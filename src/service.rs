//! Orchestration of the store, the query parser, and the filter engine.
//!
//! [`TodoService`] mirrors how an interactive client uses the pieces: fetch
//! everything once, keep the list in memory, and refresh it from the list
//! every mutation returns.

use crate::error::Result;
use crate::filter;
use crate::query;
use crate::store::FileStore;
use crate::todo::Todo;
use chrono::{DateTime, Utc};

/// Fields of a todo that an edit can change.
///
/// `None` leaves a field alone. The due date is doubly optional so an edit
/// can clear it: `Some(None)` removes the date, `Some(Some(..))` sets one.
#[derive(Debug, Default, Clone)]
pub struct TodoUpdate {
    /// New title (if Some).
    pub title: Option<String>,
    /// New description (if Some).
    pub description: Option<String>,
    /// New completion state (if Some).
    pub completed: Option<bool>,
    /// New due date (if Some).
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TodoUpdate {
    /// Check if any fields are set for update.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.due_date.is_none()
    }
}

/// Interactive operations over a cached record list.
#[derive(Debug)]
pub struct TodoService {
    store: FileStore<Todo>,
    todos: Vec<Todo>,
}

impl TodoService {
    /// Create a service and load the current records.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read (see [`FileStore::fetch_all`]).
    pub fn new(store: FileStore<Todo>) -> Result<Self> {
        let todos = store.fetch_all()?;
        Ok(Self { store, todos })
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &FileStore<Todo> {
        &self.store
    }

    /// The cached record list, in stored order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Re-read the store into the cache.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read.
    pub fn refresh(&mut self) -> Result<()> {
        self.todos = self.store.fetch_all()?;
        Ok(())
    }

    /// Create a new incomplete todo with a generated id and append it.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or written.
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Todo> {
        let todo = Todo::new(title, description, due_date);
        self.todos = self.store.append(todo.clone())?;
        Ok(todo)
    }

    /// Apply a partial update to the todo with the given id.
    ///
    /// Returns `Ok(None)` when no todo has that id; nothing is written.
    /// An empty update is answered from the cache without touching the
    /// store. The id always survives the edit.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or written.
    pub fn edit(&mut self, id: &str, update: TodoUpdate) -> Result<Option<Todo>> {
        let Some(current) = self.todos.iter().find(|todo| todo.id == id) else {
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(current.clone()));
        }

        let mut replacement = current.clone();
        if let Some(title) = update.title {
            replacement.title = title;
        }
        if let Some(description) = update.description {
            replacement.description = description;
        }
        if let Some(completed) = update.completed {
            replacement.is_completed = completed;
        }
        if let Some(due_date) = update.due_date {
            replacement.due_date = due_date;
        }

        self.todos = self.store.update(replacement)?;
        Ok(self.todos.iter().find(|todo| todo.id == id).cloned())
    }

    /// Flip the completion state of the todo with the given id.
    ///
    /// Returns `Ok(None)` when no todo has that id.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or written.
    pub fn toggle(&mut self, id: &str) -> Result<Option<Todo>> {
        let Some(current) = self.todos.iter().find(|todo| todo.id == id) else {
            return Ok(None);
        };

        let update =
            TodoUpdate { completed: Some(!current.is_completed), ..TodoUpdate::default() };
        self.edit(id, update)
    }

    /// Parse a raw query and return the matching cached todos, in stored
    /// order.
    #[must_use]
    pub fn search(&self, raw_query: &str) -> Vec<&Todo> {
        let filter = query::parse_query(raw_query);
        filter::apply(&filter, &self.todos)
    }
}
