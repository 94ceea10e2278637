//! Chat message CRUD; mirrors the todo service over the `chats` table.

use crate::error::AppError;
use crate::model::{ChatMessage, ChatPatch, NewChatMessage};
use crate::query::Listing;
use sqlx::PgPool;
use uuid::Uuid;

pub const SORT_COLUMNS: &[&str] = &["id", "task", "message", "date"];

const SELECT: &str = r#"SELECT id, task, message, "date" FROM chats"#;

pub struct ChatService;

impl ChatService {
    pub async fn list(pool: &PgPool, listing: &Listing) -> Result<Vec<ChatMessage>, AppError> {
        match listing {
            Listing::ByTask(name) => {
                let sql = format!("{} WHERE task = $1", SELECT);
                tracing::debug!(sql = %sql, "query");
                Ok(sqlx::query_as::<_, ChatMessage>(&sql)
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
                Ok(sqlx::query_as::<_, ChatMessage>(&sql).fetch_all(pool).await?)
            }
        }
    }

    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<ChatMessage>, AppError> {
        let sql = format!("{} WHERE id = $1", SELECT);
        tracing::debug!(sql = %sql, id = %id, "query");
        Ok(sqlx::query_as::<_, ChatMessage>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn create(pool: &PgPool, new: NewChatMessage) -> Result<ChatMessage, AppError> {
        let sql = r#"INSERT INTO chats (id, task, message, "date")
            VALUES ($1, $2, $3, $4)
            RETURNING id, task, message, "date""#;
        let id = Uuid::new_v4();
        tracing::debug!(sql = %sql, id = %id, "query");
        Ok(sqlx::query_as::<_, ChatMessage>(sql)
            .bind(id)
            .bind(new.task)
            .bind(new.message)
            .bind(new.date)
            .fetch_one(pool)
            .await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        patch: ChatPatch,
    ) -> Result<Option<ChatMessage>, AppError> {
        let mut msg = match Self::find(pool, id).await? {
            Some(msg) => msg,
            None => return Ok(None),
        };
        msg.apply(patch);
        let sql = r#"UPDATE chats SET task = $2, message = $3, "date" = $4
            WHERE id = $1
            RETURNING id, task, message, "date""#;
        tracing::debug!(sql = %sql, id = %id, "query");
        Ok(sqlx::query_as::<_, ChatMessage>(sql)
            .bind(id)
            .bind(msg.task)
            .bind(msg.message)
            .bind(msg.date)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
        let sql = "DELETE FROM chats WHERE id = $1";
        tracing::debug!(sql = %sql, id = %id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
