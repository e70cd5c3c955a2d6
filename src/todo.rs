//! The todo record model.

use crate::id;
use crate::store::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// This struct is also the on-disk wire format: records serialize with
/// camelCase field names, and the due date is an RFC 3339 string or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned at creation and never changed.
    pub id: String,
    /// Short summary line.
    pub title: String,
    /// Free-form details; may contain lightweight markup.
    pub description: String,
    /// Whether the item has been completed.
    pub is_completed: bool,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl Todo {
    /// Create a new incomplete todo with a freshly generated id.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        let title = title.into();
        Self {
            id: id::generate_todo_id(&title),
            title,
            description: description.into(),
            is_completed: false,
            due_date,
        }
    }
}

impl Record for Todo {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
