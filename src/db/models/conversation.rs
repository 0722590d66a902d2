//! Conversation model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a discussion thread
///
/// A conversation owns an ordered collection of messages and of tasks; both
/// are removed by cascade when the conversation is deleted. Created
/// implicitly on the first chat turn when no identifier is supplied, or
/// explicitly through the `create_conversation` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    /// Unique conversation identifier, assigned by the database
    pub id: i64,

    /// Conversation title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}
