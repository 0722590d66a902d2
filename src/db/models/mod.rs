//! Database models
//!
//! Core data models for persistent storage. All timestamp fields are stored
//! as RFC3339 strings (TEXT in SQLite) due to sqlx and SQLite type
//! limitations with chrono::DateTime<Utc>.

pub mod conversation;
pub mod message;
pub mod task;

pub use conversation::Conversation;
pub use message::{Message, Role};
pub use task::{Priority, Task, TaskStatus};
