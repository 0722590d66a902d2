//! API request/response models
//!
//! Data transfer objects decoupling the HTTP surface from the database models.

pub mod chat;
pub mod conversation;
pub mod task;

pub use chat::{ChatRequest, ChatResponse};
pub use conversation::{
    ConversationDetailResponse, ConversationResponse, MessageResponse, UserConversationsResponse,
};
pub use task::{TaskListQuery, TaskListResponse, TaskResponse};
