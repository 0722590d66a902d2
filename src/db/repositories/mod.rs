//! Repository pattern implementations for database access
//!
//! This module provides repository structs for managing database operations
//! on the three core entities: tasks, conversations, and messages.

pub mod conversation_repo;
pub mod message_repo;
pub mod task_repo;

pub use conversation_repo::ConversationRepository;
pub use message_repo::MessageRepository;
pub use task_repo::TaskRepository;
