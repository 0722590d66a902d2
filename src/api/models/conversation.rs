//! Conversation API models and DTOs
//!
//! Data transfer objects for conversation endpoints.

use serde::{Deserialize, Serialize};

use crate::db::models::{Conversation, Message};

/// Conversation metadata for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    /// Conversation ID
    pub id: i64,
    /// Conversation title
    pub title: String,
    /// Conversation description
    pub description: Option<String>,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Last update timestamp (RFC3339)
    pub updated_at: String,
}

impl ConversationResponse {
    pub fn from_db_conversation(conversation: Conversation) -> Self {
        Self {
            id: conversation.id,
            title: conversation.title,
            description: conversation.description,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        }
    }
}

/// Message entry within a conversation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message ID
    pub id: i64,
    /// Message text
    pub content: String,
    /// Sender role
    pub role: String,
    /// Message timestamp (RFC3339)
    pub timestamp: String,
}

impl MessageResponse {
    pub fn from_db_message(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            role: message.role.to_string(),
            timestamp: message.timestamp,
        }
    }
}

/// Conversation with its full transcript
///
/// GET /api/conversations/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDetailResponse {
    /// Conversation ID
    pub id: i64,
    /// Conversation title
    pub title: String,
    /// Conversation description
    pub description: Option<String>,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Messages ordered by timestamp
    pub messages: Vec<MessageResponse>,
}

impl ConversationDetailResponse {
    pub fn new(conversation: Conversation, messages: Vec<Message>) -> Self {
        Self {
            id: conversation.id,
            title: conversation.title,
            description: conversation.description,
            created_at: conversation.created_at,
            messages: messages
                .into_iter()
                .map(MessageResponse::from_db_message)
                .collect(),
        }
    }
}

/// Conversation listing for a user
///
/// GET /api/users/:user_id/conversations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConversationsResponse {
    /// The requested user
    pub user_id: String,
    /// Conversations, newest first
    pub conversations: Vec<ConversationResponse>,
}
