//! Task listing endpoint handler

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    models::{TaskListQuery, TaskListResponse, TaskResponse},
    routes::AppState,
};
use crate::db::models::TaskStatus;
use crate::db::repositories::TaskRepository;

/// List tasks, optionally filtered by status
///
/// GET /api/tasks?status=
pub async fn list_tasks(
    State(app_state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let pool = app_state.db.pool();

    let tasks = match query.status.as_deref() {
        Some(literal) => {
            let status = literal
                .parse::<TaskStatus>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            TaskRepository::list_by_status(pool, status)
                .await
                .map_err(|e| ApiError::InternalError(e.to_string()))?
        }
        None => TaskRepository::list(pool)
            .await
            .map_err(|e| ApiError::InternalError(e.to_string()))?,
    };

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskResponse::from_db_task).collect(),
    }))
}
