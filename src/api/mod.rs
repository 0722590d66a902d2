//! REST API layer
//!
//! Provides HTTP endpoints for the chat agent and its stored entities:
//! - Chat turns (natural-language task management)
//! - Conversation transcripts
//! - Task listing
//! - Service status

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use middleware::cors_layer;
pub use routes::create_router;
