//! Chat Service: validated, persisted conversation turns
//!
//! A turn validates the input, ensures the conversation exists (creating
//! one on demand), records the user message, runs the agent, and records
//! the assistant reply. Both messages are persisted even when the agent
//! replies with a confirmation prompt or an apology.

use crate::agent::TaskAgent;
use crate::db::connection::DatabasePool;
use crate::db::models::Role;
use crate::db::repositories::{ConversationRepository, MessageRepository};
use crate::db::DatabaseError;
use crate::ChatError;

/// Maximum accepted user message length, matching the storage constraint
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Result of one completed chat turn
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Conversation the turn was recorded in (created on demand)
    pub conversation_id: i64,
    /// The assistant's reply text
    pub response: String,
}

/// Stateless facade over the agent and the conversation repositories
pub struct ChatService;

impl ChatService {
    /// Process one chat turn for a user
    ///
    /// # Arguments
    /// * `user_id` - Caller identity, 1-100 characters
    /// * `message` - The user's message text
    /// * `conversation_id` - Existing conversation to append to, or `None`
    ///   to start a new one
    /// * `bypass_confirmation` - Execute gated tools instead of prompting
    ///
    /// # Returns
    /// The conversation id and reply text, or a `ChatError` when validation
    /// fails or the referenced conversation does not exist.
    pub async fn process_turn(
        pool: &DatabasePool,
        user_id: &str,
        message: &str,
        conversation_id: Option<i64>,
        bypass_confirmation: bool,
    ) -> crate::Result<ChatTurn> {
        if !(1..=100).contains(&user_id.chars().count()) {
            return Err(ChatError::InvalidArgument("Invalid user_id".to_string()));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::InvalidArgument(
                "Message cannot be empty".to_string(),
            ));
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::InvalidArgument(format!(
                "Message must be at most {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let conversation_id = match conversation_id {
            Some(id) => {
                ConversationRepository::get_by_id(pool, id)
                    .await
                    .map_err(DatabaseError::from)?
                    .ok_or(ChatError::ConversationNotFound(id))?;
                id
            }
            None => {
                let conversation = ConversationRepository::create(
                    pool,
                    &format!("Conversation with {}", user_id),
                    Some(&format!("Chat session for user {}", user_id)),
                )
                .await
                .map_err(DatabaseError::from)?;
                tracing::info!(
                    "Created conversation {} for user {}",
                    conversation.id,
                    user_id
                );
                conversation.id
            }
        };

        MessageRepository::create(pool, conversation_id, message, Role::User)
            .await
            .map_err(DatabaseError::from)?;

        let response = TaskAgent::new()
            .handle_message(pool, message, bypass_confirmation)
            .await;

        MessageRepository::create(pool, conversation_id, &response, Role::Assistant)
            .await
            .map_err(DatabaseError::from)?;

        Ok(ChatTurn {
            conversation_id,
            response,
        })
    }
}
