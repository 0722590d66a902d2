//! Message repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::{Message, Role};
use chrono::Utc;

/// Message repository for managing message database operations
///
/// Messages are append-only; there are no update or delete operations.
pub struct MessageRepository;

impl MessageRepository {
    /// Append a message to a conversation
    ///
    /// Fails with a constraint violation if the conversation does not exist.
    pub async fn create(
        pool: &DatabasePool,
        conversation_id: i64,
        content: &str,
        role: Role,
    ) -> Result<Message, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Message>(
            "INSERT INTO message (content, role, timestamp, created_at, conversation_id)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(content)
        .bind(role)
        .bind(&now)
        .bind(&now)
        .bind(conversation_id)
        .fetch_one(pool)
        .await
    }

    /// List a conversation's messages ordered chronologically
    pub async fn list_by_conversation(
        pool: &DatabasePool,
        conversation_id: i64,
    ) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM message WHERE conversation_id = ? ORDER BY timestamp, id",
        )
        .bind(conversation_id)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::ConversationRepository;
    use crate::db::DatabaseConnection;

    async fn setup_pool() -> DatabaseConnection {
        let conn = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
            .await
            .unwrap();
        conn.run_migrations().await.unwrap();
        conn
    }

    #[tokio::test]
    async fn test_append_and_list_in_order() {
        let conn = setup_pool().await;

        let conversation = ConversationRepository::create(conn.pool(), "Chat", None)
            .await
            .unwrap();

        MessageRepository::create(conn.pool(), conversation.id, "hello", Role::User)
            .await
            .unwrap();
        MessageRepository::create(conn.pool(), conversation.id, "hi there", Role::Assistant)
            .await
            .unwrap();

        let messages = MessageRepository::list_by_conversation(conn.pool(), conversation.id)
            .await
            .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_create_requires_existing_conversation() {
        let conn = setup_pool().await;

        let result = MessageRepository::create(conn.pool(), 999, "orphan", Role::User).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_conversation_delete_cascades_to_messages() {
        let conn = setup_pool().await;

        let conversation = ConversationRepository::create(conn.pool(), "Chat", None)
            .await
            .unwrap();
        MessageRepository::create(conn.pool(), conversation.id, "hello", Role::User)
            .await
            .unwrap();

        ConversationRepository::delete(conn.pool(), conversation.id)
            .await
            .unwrap();

        let messages = MessageRepository::list_by_conversation(conn.pool(), conversation.id)
            .await
            .unwrap();
        assert!(messages.is_empty());
    }
}
