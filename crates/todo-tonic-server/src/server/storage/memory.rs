//! In-memory [`TodoStore`] implementation.
//!
//! Backs the handler tests so they run without a MySQL instance. Mirrors the
//! MySQL store's observable behavior: ids start at 1, increase monotonically,
//! and are never reused after a delete.

use super::TodoStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use todo_tonic_core::types::{NewTodo, TodoFields, TodoRecord};
use todo_tonic_core::{Error, Result};

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    records: BTreeMap<i32, TodoRecord>,
}

/// A process-local todo store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: Mutex<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records, for test assertions.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create(&self, new: NewTodo) -> Result<TodoRecord> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let record = TodoRecord {
            id: inner.next_id,
            title: new.title,
            description: new.description,
        };
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> Result<TodoRecord> {
        self.inner
            .lock()
            .unwrap()
            .records
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound { id })
    }

    async fn update_fields(&self, id: i32, fields: TodoFields) -> Result<TodoRecord> {
        let mut inner = self.inner.lock().unwrap();
        let record = inner.records.get_mut(&id).ok_or(Error::NotFound { id })?;
        fields.apply_to(record);
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(title: &str, description: &str) -> NewTodo {
        NewTodo {
            title: title.into(),
            description: description.into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_nonzero_ids() -> Result<()> {
        let store = MemoryTodoStore::new();
        let a = store.create(new_todo("a", "")).await?;
        let b = store.create(new_todo("b", "")).await?;
        assert_ne!(a.id, 0);
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() -> Result<()> {
        let store = MemoryTodoStore::new();
        let a = store.create(new_todo("a", "")).await?;
        store.delete_by_id(a.id).await?;
        let b = store.create(new_todo("b", "")).await?;
        assert!(b.id > a.id);
        Ok(())
    }

    #[tokio::test]
    async fn update_on_missing_id_is_not_found() {
        let store = MemoryTodoStore::new();
        let err = store
            .update_fields(999, TodoFields::default())
            .await
            .unwrap_err();
        assert_eq!(err, Error::NotFound { id: 999 });
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_then_find_is_not_found() -> Result<()> {
        let store = MemoryTodoStore::new();
        let record = store.create(new_todo("a", "b")).await?;
        store.delete_by_id(record.id).await?;
        let err = store.find_by_id(record.id).await.unwrap_err();
        assert_eq!(err, Error::NotFound { id: record.id });
        Ok(())
    }
}
