//! Domain types shared between the request handler and the storage layer.
//!
//! The wire contract ([`proto`](crate::proto)) has no optional-field markers,
//! so the update message overloads the empty string to mean "leave this field
//! unchanged". That sentinel is decoded exactly once, here, into
//! [`TodoFields`] - everything past this module works with explicit
//! `Option`s instead of magic strings.

use crate::proto;

/// A live todo record as persisted by the store.
///
/// `id` is assigned by storage on create and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<TodoRecord> for proto::Todo {
    fn from(record: TodoRecord) -> Self {
        proto::Todo {
            id: record.id,
            title: record.title,
            description: record.description,
        }
    }
}

/// The client-supplied portion of a create request. Carries no id: any id in
/// the wire message is discarded before this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

impl From<&proto::Todo> for NewTodo {
    fn from(todo: &proto::Todo) -> Self {
        NewTodo {
            title: todo.title.clone(),
            description: todo.description.clone(),
        }
    }
}

/// The subset of record fields an update intends to change.
///
/// `None` means "leave unchanged". An all-`None` field set is a legal no-op
/// update that still returns the current record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFields {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TodoFields {
    /// Decodes the wire sentinel from an update request: an empty `title` or
    /// `description` means the field was not supplied, not "clear it".
    pub fn from_wire(todo: &proto::Todo) -> Self {
        TodoFields {
            title: (!todo.title.is_empty()).then(|| todo.title.clone()),
            description: (!todo.description.is_empty()).then(|| todo.description.clone()),
        }
    }

    /// Returns `true` if the update supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Applies the populated fields to `record`, leaving the rest untouched.
    pub fn apply_to(&self, record: &mut TodoRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
    }
}
