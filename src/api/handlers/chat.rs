//! Chat endpoint handler
//!
//! Runs one chat turn through the service layer and returns the reply.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{
    error::ApiResult,
    models::{ChatRequest, ChatResponse},
    routes::AppState,
};
use crate::service::ChatService;

/// Handle a chat message from a user
///
/// POST /api/:user_id/chat
///
/// Confirmation is stateless: gated tool calls reply with a confirmation
/// prompt instead of executing, and nothing is stored server-side.
pub async fn chat(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    req.validate()?;

    let pool = app_state.db.pool();
    let turn =
        ChatService::process_turn(pool, &user_id, &req.message, req.conversation_id, false)
            .await?;

    tracing::info!(
        "Chat turn for user {} in conversation {}",
        user_id,
        turn.conversation_id
    );
    Ok(Json(ChatResponse::new(turn.conversation_id, turn.response)))
}
