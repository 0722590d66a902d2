//! Conversation repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Conversation;
use chrono::Utc;

/// Conversation repository for managing conversation database operations
pub struct ConversationRepository;

impl ConversationRepository {
    /// Create a new conversation
    pub async fn create(
        pool: &DatabasePool,
        title: &str,
        description: Option<&str>,
    ) -> Result<Conversation, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversation (title, description, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(title)
        .bind(description)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Get a conversation by ID
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: i64,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        sqlx::query_as::<_, Conversation>("SELECT * FROM conversation WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all conversations, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Conversation>, sqlx::Error> {
        sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversation ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a conversation
    ///
    /// Messages and tasks owned by the conversation are removed by cascade.
    pub async fn delete(pool: &DatabasePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM conversation WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
