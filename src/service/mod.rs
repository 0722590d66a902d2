//! Service layer coordinating the agent and persistence for chat turns

pub mod chat;

pub use chat::{ChatService, ChatTurn};
