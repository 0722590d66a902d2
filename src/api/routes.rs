//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::{handlers, middleware};
use crate::db::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Build the complete API router
pub fn create_router(db: DatabaseConnection) -> Router {
    let app_state = AppState { db };

    Router::new()
        // Status endpoint
        .route("/", get(handlers::status))
        // Chat endpoint
        .route("/api/:user_id/chat", post(handlers::chat))
        // Conversation endpoints
        .route(
            "/api/conversations/:id",
            get(handlers::get_conversation),
        )
        .route(
            "/api/users/:user_id/conversations",
            get(handlers::list_user_conversations),
        )
        // Task endpoint
        .route("/api/tasks", get(handlers::list_tasks))
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(app_state)
}
