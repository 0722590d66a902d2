//! Task API models and DTOs
//!
//! Data transfer objects for task listing.

use serde::{Deserialize, Serialize};

use crate::db::models::Task;

/// Query parameters for GET /api/tasks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListQuery {
    /// Filter by exact status literal (optional)
    pub status: Option<String>,
}

/// Task entry for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task ID
    pub id: i64,
    /// Task title
    pub title: String,
    /// Task description
    pub description: Option<String>,
    /// Task status
    pub status: String,
    /// Task priority
    pub priority: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Last update timestamp (RFC3339)
    pub updated_at: String,
    /// Owning conversation, if any
    pub conversation_id: Option<i64>,
}

impl TaskResponse {
    pub fn from_db_task(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            created_at: task.created_at,
            updated_at: task.updated_at,
            conversation_id: task.conversation_id,
        }
    }
}

/// Response body for GET /api/tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Matching tasks in id order
    pub tasks: Vec<TaskResponse>,
}
