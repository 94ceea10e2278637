//! Todo CRUD: one SQL statement per operation (update is read-merge-write).

use crate::error::AppError;
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::query::Listing;
use sqlx::PgPool;
use uuid::Uuid;

/// Columns a list request may sort by.
pub const SORT_COLUMNS: &[&str] = &["id", "task", "completed", "date", "finished"];

// "date" collides with the type name, so it stays quoted everywhere.
const SELECT: &str = r#"SELECT id, task, completed, "date", finished FROM todos"#;

pub struct TodoService;

impl TodoService {
    pub async fn list(pool: &PgPool, listing: &Listing) -> Result<Vec<Todo>, AppError> {
        match listing {
            Listing::ByTask(name) => {
                let sql = format!("{} WHERE task = $1", SELECT);
                tracing::debug!(sql = %sql, "query");
                Ok(sqlx::query_as::<_, Todo>(&sql)
                    .bind(name)
                    .fetch_all(pool)
                    .await?)
            }
            Listing::Sorted(sort) => {
                let mut sql = SELECT.to_string();
                if let Some(order) = sort.order_by() {
                    sql.push(' ');
                    sql.push_str(&order);
                }
                tracing::debug!(sql = %sql, "query");
                Ok(sqlx::query_as::<_, Todo>(&sql).fetch_all(pool).await?)
            }
        }
    }

    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Todo>, AppError> {
        let sql = format!("{} WHERE id = $1", SELECT);
        tracing::debug!(sql = %sql, id = %id, "query");
        Ok(sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Insert with a freshly assigned identifier; returns the stored row.
    pub async fn create(pool: &PgPool, new: NewTodo) -> Result<Todo, AppError> {
        let sql = r#"INSERT INTO todos (id, task, completed, "date", finished)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, task, completed, "date", finished"#;
        let id = Uuid::new_v4();
        tracing::debug!(sql = %sql, id = %id, "query");
        Ok(sqlx::query_as::<_, Todo>(sql)
            .bind(id)
            .bind(new.task)
            .bind(new.completed)
            .bind(new.date)
            .bind(new.finished)
            .fetch_one(pool)
            .await?)
    }

    /// Fetch the row, apply the patch, persist every field. Returns None when
    /// the id has no row, including the case where the row was deleted
    /// between read and write (the write's RETURNING comes back empty).
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, AppError> {
        let mut todo = match Self::find(pool, id).await? {
            Some(todo) => todo,
            None => return Ok(None),
        };
        todo.apply(patch);
        let sql = r#"UPDATE todos SET task = $2, completed = $3, "date" = $4, finished = $5
            WHERE id = $1
            RETURNING id, task, completed, "date", finished"#;
        tracing::debug!(sql = %sql, id = %id, "query");
        Ok(sqlx::query_as::<_, Todo>(sql)
            .bind(id)
            .bind(todo.task)
            .bind(todo.completed)
            .bind(todo.date)
            .bind(todo.finished)
            .fetch_optional(pool)
            .await?)
    }

    /// Returns true when a row was deleted.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
        let sql = "DELETE FROM todos WHERE id = $1";
        tracing::debug!(sql = %sql, id = %id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
