//! API endpoint handlers

pub mod chat;
pub mod conversations;
pub mod health;
pub mod tasks;

pub use chat::chat;
pub use conversations::{get_conversation, list_user_conversations};
pub use health::status;
pub use tasks::list_tasks;
