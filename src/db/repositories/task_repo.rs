//! Task repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::{Priority, Task, TaskStatus};
use chrono::Utc;

/// Task repository for managing task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task in the database
    ///
    /// The identifier is assigned by SQLite AUTOINCREMENT.
    ///
    /// # Returns
    /// Created task or database error
    pub async fn create(
        pool: &DatabasePool,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
        priority: Priority,
        conversation_id: Option<i64>,
    ) -> Result<Task, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Task>(
            "INSERT INTO task (title, description, status, priority, created_at, updated_at, conversation_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(priority)
        .bind(&now)
        .bind(&now)
        .bind(conversation_id)
        .fetch_one(pool)
        .await
    }

    /// Get a task by ID
    ///
    /// # Returns
    /// Task if found, None if not found, or database error
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT * FROM task WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all tasks, oldest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT * FROM task ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// List tasks with an exact status match
    pub async fn list_by_status(
        pool: &DatabasePool,
        status: TaskStatus,
    ) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT * FROM task WHERE status = ? ORDER BY id")
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Persist an updated task, bumping its `updated_at` timestamp
    ///
    /// # Returns
    /// The stored row or database error
    pub async fn update(pool: &DatabasePool, task: &Task) -> Result<Task, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Task>(
            "UPDATE task
             SET title = ?, description = ?, status = ?, priority = ?, conversation_id = ?, updated_at = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .bind(task.priority)
        .bind(task.conversation_id)
        .bind(&now)
        .bind(task.id)
        .fetch_one(pool)
        .await
    }

    /// Delete a task
    pub async fn delete(pool: &DatabasePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM task WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count total tasks
    pub async fn count(pool: &DatabasePool) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM task")
            .fetch_one(pool)
            .await?;

        Ok(result.0)
    }
}
