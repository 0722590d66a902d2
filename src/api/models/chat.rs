//! Chat API models and DTOs
//!
//! Data transfer objects for the chat endpoint.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::service::chat::MAX_MESSAGE_LENGTH;

/// Request body for POST /api/:user_id/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message text (required, 1-5000 characters)
    pub message: String,

    /// Existing conversation to continue (optional; a new conversation is
    /// created when absent)
    pub conversation_id: Option<i64>,
}

impl ChatRequest {
    /// Validate the chat request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        crate::api::middleware::validation::validate_not_empty(&self.message, "message")?;
        crate::api::middleware::validation::validate_string_length(
            &self.message,
            "message",
            1,
            MAX_MESSAGE_LENGTH,
        )?;
        Ok(())
    }
}

/// Response body for POST /api/:user_id/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Conversation the turn was recorded in
    pub conversation_id: i64,

    /// The assistant's reply text
    pub response: String,

    /// Server timestamp of the reply (RFC3339)
    pub timestamp: String,
}

impl ChatResponse {
    /// Build a response stamped with the current time
    pub fn new(conversation_id: i64, response: String) -> Self {
        Self {
            conversation_id,
            response,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_message() {
        let req = ChatRequest {
            message: "  ".to_string(),
            conversation_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_message() {
        let req = ChatRequest {
            message: "x".repeat(MAX_MESSAGE_LENGTH + 1),
            conversation_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_carries_rfc3339_timestamp() {
        let resp = ChatResponse::new(1, "done".to_string());
        assert!(chrono::DateTime::parse_from_rfc3339(&resp.timestamp).is_ok());
    }
}
