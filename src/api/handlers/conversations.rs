//! Conversation endpoint handlers
//!
//! Provides read access to conversations and their transcripts.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    middleware::validation::{validate_id, validate_user_id},
    models::{ConversationDetailResponse, ConversationResponse, UserConversationsResponse},
    routes::AppState,
};
use crate::db::repositories::{ConversationRepository, MessageRepository};

/// Get a conversation with its messages ordered by timestamp
///
/// GET /api/conversations/:id
pub async fn get_conversation(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ConversationDetailResponse>> {
    validate_id(id, "id")?;

    let pool = app_state.db.pool();
    let conversation = ConversationRepository::get_by_id(pool, id)
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Conversation not found".to_string()))?;

    let messages = MessageRepository::list_by_conversation(pool, id)
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(Json(ConversationDetailResponse::new(conversation, messages)))
}

/// List conversations for a user, newest first
///
/// GET /api/users/:user_id/conversations
///
/// Conversations are not partitioned by user, so this returns all of them.
pub async fn list_user_conversations(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserConversationsResponse>> {
    validate_user_id(&user_id)?;

    let pool = app_state.db.pool();
    let conversations = ConversationRepository::list(pool)
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(Json(UserConversationsResponse {
        user_id,
        conversations: conversations
            .into_iter()
            .map(ConversationResponse::from_db_conversation)
            .collect(),
    }))
}
