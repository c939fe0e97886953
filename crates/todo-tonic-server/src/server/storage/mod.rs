//! Persistence layer for todo records.
//!
//! The handler talks to storage exclusively through the [`TodoStore`] trait,
//! injected as `Arc<dyn TodoStore>` at startup. Each trait method translates
//! to exactly one logical store operation - no retries, no batching, no
//! caching - and the implementations are the only place identifiers are
//! generated or looked up.
//!
//! Two failure kinds are kept distinct at this boundary: a missing row
//! surfaces as [`Error::NotFound`], while an erroring or unreachable store
//! surfaces as [`Error::Storage`]. The handler maps them to different gRPC
//! status codes.
//!
//! ## Implementations
//!
//! - [`MySqlTodoStore`] - production backend over a sqlx MySQL pool.
//! - [`MemoryTodoStore`] - in-process map, used to exercise the handler in
//!   tests without a database.
//!
//! [`Error::NotFound`]: todo_tonic_core::Error::NotFound
//! [`Error::Storage`]: todo_tonic_core::Error::Storage

pub mod memory;
pub mod mysql;

pub use memory::MemoryTodoStore;
pub use mysql::MySqlTodoStore;

use async_trait::async_trait;
use todo_tonic_core::Result;
use todo_tonic_core::types::{NewTodo, TodoFields, TodoRecord};

/// Durable storage for todo records.
///
/// Concurrency control between an existence check and the write that follows
/// it is delegated to the backing store's own consistency guarantees; this
/// trait promises nothing about multi-call atomicity.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Persists a new record and returns it with its storage-assigned id.
    async fn create(&self, new: NewTodo) -> Result<TodoRecord>;

    /// Fetches the record with the given id, or `Error::NotFound`.
    async fn find_by_id(&self, id: i32) -> Result<TodoRecord>;

    /// Applies the populated fields to the record with the given id and
    /// returns the merged result. An empty field set is a no-op that still
    /// returns the current record.
    async fn update_fields(&self, id: i32, fields: TodoFields) -> Result<TodoRecord>;

    /// Physically removes the record with the given id, or `Error::NotFound`
    /// if no such record exists.
    async fn delete_by_id(&self, id: i32) -> Result<()>;
}
