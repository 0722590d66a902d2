//! Message model for database persistence

use crate::ChatError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Role of the message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            "system" => Ok(Role::System),
            other => Err(ChatError::InvalidArgument(format!("Invalid role: {}", other))),
        }
    }
}

/// A single message in a conversation
///
/// Messages are append-only and immutable once created; every message
/// references an existing conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier, assigned by the database
    pub id: i64,

    /// Message text (1..=5000 characters)
    pub content: String,

    /// Sender role
    pub role: Role,

    /// Timestamp when the message was sent (RFC3339 string)
    pub timestamp: String,

    /// Timestamp when the record was created (RFC3339 string)
    pub created_at: String,

    /// Owning conversation
    pub conversation_id: i64,
}
