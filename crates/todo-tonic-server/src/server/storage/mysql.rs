//! MySQL-backed [`TodoStore`] implementation.
//!
//! Uses runtime-bound queries (`sqlx::query`) rather than the compile-time
//! checked macros so the crate builds without a `DATABASE_URL` present.
//! Schema migrations are embedded from `./migrations` and run once at
//! connect time.

use super::TodoStore;
use crate::server::config::DatabaseConfig;
use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use todo_tonic_core::types::{NewTodo, TodoFields, TodoRecord};
use todo_tonic_core::{Error, Result};

/// Production todo store over a sqlx MySQL connection pool.
///
/// Cheap to clone; the pool is internally reference-counted.
#[derive(Clone)]
pub struct MySqlTodoStore {
    pool: MySqlPool,
}

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    description: String,
}

impl From<TodoRow> for TodoRecord {
    fn from(row: TodoRow) -> Self {
        TodoRecord {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

fn storage_error(err: sqlx::Error) -> Error {
    Error::Storage {
        context: err.to_string(),
    }
}

impl MySqlTodoStore {
    /// Connects to MySQL, runs pending migrations, and returns the store.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.dsn())
            .await
            .map_err(storage_error)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| Error::Storage {
                context: e.to_string(),
            })?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for MySqlTodoStore {
    async fn create(&self, new: NewTodo) -> Result<TodoRecord> {
        let result = sqlx::query("INSERT INTO todos (title, description) VALUES (?, ?)")
            .bind(&new.title)
            .bind(&new.description)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        let id = i32::try_from(result.last_insert_id()).map_err(|_| Error::Storage {
            context: format!("assigned id {} exceeds i32 range", result.last_insert_id()),
        })?;

        Ok(TodoRecord {
            id,
            title: new.title,
            description: new.description,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<TodoRecord> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, title, description FROM todos WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        row.map(TodoRecord::from).ok_or(Error::NotFound { id })
    }

    async fn update_fields(&self, id: i32, fields: TodoFields) -> Result<TodoRecord> {
        if !fields.is_empty() {
            // COALESCE keeps unsupplied columns at their current value, so
            // the merge happens in one statement.
            sqlx::query(
                "UPDATE todos SET title = COALESCE(?, title), \
                 description = COALESCE(?, description) WHERE id = ?",
            )
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        }

        // Re-read rather than reconstruct: if a concurrent delete won the
        // race, this surfaces NotFound instead of a fabricated record.
        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound { id });
        }

        Ok(())
    }
}
