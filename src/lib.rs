//! Todo chatbot service with a rule-based agent and conversation persistence
//!
//! This crate implements a stateless chat endpoint backed by SQLite: free-text
//! messages are resolved to structured tool calls, mutating calls pass a
//! confirmation gate, results are rendered back to natural language, and the
//! full transcript is persisted per conversation.

pub mod agent;
pub mod api;
pub mod config;
pub mod db;
pub mod service;

use thiserror::Error;

/// Errors that can occur while processing a chat turn or executing a tool
#[derive(Debug, Error)]
pub enum ChatError {
    /// Referenced task does not exist
    #[error("Task with ID {0} not found")]
    TaskNotFound(i64),

    /// Referenced conversation does not exist
    #[error("Conversation with ID {0} not found")]
    ConversationNotFound(i64),

    /// Malformed or missing tool argument, or invalid enum literal
    #[error("{0}")]
    InvalidArgument(String),

    /// Database error
    #[error(transparent)]
    Database(#[from] db::DatabaseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for chat and tool operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
