//! Tool Registry: the fixed catalog of operations the agent can execute
//!
//! Each tool has a declarative parameter schema and an executor running one
//! database operation through the repositories. Executor failures are caught
//! at this boundary and converted to a typed outcome; they never propagate as
//! raw errors to the caller.

use crate::db::connection::DatabasePool;
use crate::db::models::{Priority, Role, TaskStatus};
use crate::db::repositories::{ConversationRepository, MessageRepository, TaskRepository};
use crate::db::DatabaseError;
use crate::ChatError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A structured (name, arguments) pair representing one requested mutation
/// or query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name (e.g., "create_task")
    pub name: String,
    /// Tool arguments as a JSON object
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Tri-state (plus placeholder) result of a tool execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    /// Executor ran to completion
    Success,
    /// Executor failed (malformed arguments, invalid enum literal, or any
    /// unexpected failure)
    Error,
    /// Unregistered tool name, or the referenced entity does not exist
    NotFound,
    /// Declared but never produced
    PermissionDenied,
    /// Gated call recorded without execution; awaiting caller approval
    PendingConfirmation,
}

/// Outcome of executing one tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// Name of the tool that produced this outcome
    pub tool_name: String,
    /// Execution status
    pub status: ToolStatus,
    /// Human-readable message
    pub message: String,
    /// Data payload on success (the affected entity, or a list of entities)
    pub data: Option<Value>,
}

impl ToolOutcome {
    fn success(tool_name: &str, data: Value) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            status: ToolStatus::Success,
            message: "Tool executed successfully".to_string(),
            data: Some(data),
        }
    }

    fn failure(tool_name: &str, err: ChatError) -> Self {
        let status = match err {
            ChatError::TaskNotFound(_) | ChatError::ConversationNotFound(_) => {
                ToolStatus::NotFound
            }
            _ => ToolStatus::Error,
        };
        Self {
            tool_name: tool_name.to_string(),
            status,
            message: err.to_string(),
            data: None,
        }
    }

    /// Placeholder outcome for a gated call awaiting approval
    pub fn pending_confirmation(tool_name: &str) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            status: ToolStatus::PendingConfirmation,
            message: format!("Action '{}' requires confirmation", tool_name),
            data: None,
        }
    }
}

/// Tool Registry mapping tool names to parameter schemas and executors
pub struct ToolRegistry;

impl ToolRegistry {
    /// Names of all registered tools
    pub const TOOL_NAMES: [&'static str; 8] = [
        "create_task",
        "update_task",
        "delete_task",
        "get_task",
        "list_tasks",
        "create_conversation",
        "add_message",
        "get_conversation",
    ];

    /// Return the declarative schema for all registered tools
    ///
    /// The shape follows the function-calling convention: name, description,
    /// and a JSON-schema-like parameter spec per tool.
    pub fn schema() -> Vec<Value> {
        vec![
            json!({
                "type": "function",
                "function": {
                    "name": "create_task",
                    "description": "Create a new task",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string", "description": "Title of the task"},
                            "description": {"type": "string", "description": "Description of the task"},
                            "status": {"type": "string", "enum": ["pending", "in_progress", "completed"], "description": "Initial status of the task"},
                            "priority": {"type": "string", "enum": ["low", "medium", "high", "urgent"], "description": "Priority level of the task"}
                        },
                        "required": ["title"]
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "update_task",
                    "description": "Update an existing task",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "description": "ID of the task to update"},
                            "title": {"type": "string", "description": "New title of the task"},
                            "description": {"type": "string", "description": "New description of the task"},
                            "status": {"type": "string", "enum": ["pending", "in_progress", "completed"], "description": "New status of the task"},
                            "priority": {"type": "string", "enum": ["low", "medium", "high", "urgent"], "description": "New priority level of the task"}
                        },
                        "required": ["id"]
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "delete_task",
                    "description": "Delete a task",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "description": "ID of the task to delete"}
                        },
                        "required": ["id"]
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "get_task",
                    "description": "Get details of a specific task",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "description": "ID of the task to retrieve"}
                        },
                        "required": ["id"]
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "list_tasks",
                    "description": "List all tasks or filter by status",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "status": {"type": "string", "enum": ["pending", "in_progress", "completed"], "description": "Filter tasks by status"}
                        }
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "create_conversation",
                    "description": "Create a new conversation",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string", "description": "Title of the conversation"},
                            "description": {"type": "string", "description": "Description of the conversation"}
                        },
                        "required": ["title"]
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "add_message",
                    "description": "Add a message to a conversation",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "conversation_id": {"type": "integer", "description": "ID of the conversation"},
                            "content": {"type": "string", "description": "Content of the message"},
                            "role": {"type": "string", "enum": ["user", "assistant", "system"], "description": "Role of the message sender"}
                        },
                        "required": ["conversation_id", "content", "role"]
                    }
                }
            }),
            json!({
                "type": "function",
                "function": {
                    "name": "get_conversation",
                    "description": "Get details of a specific conversation",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "description": "ID of the conversation to retrieve"}
                        },
                        "required": ["id"]
                    }
                }
            }),
        ]
    }

    /// Execute a tool with the given arguments
    ///
    /// Returns `NotFound` when the tool name is unregistered, `Error` or
    /// `NotFound` when the executor fails, and `Success` with the entity
    /// payload otherwise. Never panics or propagates an error.
    pub async fn execute(pool: &DatabasePool, name: &str, arguments: &Value) -> ToolOutcome {
        let result = match name {
            "create_task" => Self::create_task(pool, arguments).await,
            "update_task" => Self::update_task(pool, arguments).await,
            "delete_task" => Self::delete_task(pool, arguments).await,
            "get_task" => Self::get_task(pool, arguments).await,
            "list_tasks" => Self::list_tasks(pool, arguments).await,
            "create_conversation" => Self::create_conversation(pool, arguments).await,
            "add_message" => Self::add_message(pool, arguments).await,
            "get_conversation" => Self::get_conversation(pool, arguments).await,
            _ => {
                return ToolOutcome {
                    tool_name: name.to_string(),
                    status: ToolStatus::NotFound,
                    message: format!("Tool '{}' not found", name),
                    data: None,
                }
            }
        };

        match result {
            Ok(data) => ToolOutcome::success(name, data),
            Err(err) => {
                tracing::debug!("Tool '{}' failed: {}", name, err);
                ToolOutcome::failure(name, err)
            }
        }
    }

    async fn create_task(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let title = required_str(args, "title")?;
        let description = optional_str(args, "description");
        let status = match optional_str(args, "status") {
            Some(s) => s.parse::<TaskStatus>()?,
            None => TaskStatus::Pending,
        };
        let priority = match optional_str(args, "priority") {
            Some(s) => s.parse::<Priority>()?,
            None => Priority::Medium,
        };
        let conversation_id = args.get("conversation_id").and_then(Value::as_i64);

        let task = TaskRepository::create(pool, title, description, status, priority, conversation_id)
            .await
            .map_err(DatabaseError::from)?;
        Ok(serde_json::to_value(task)?)
    }

    async fn update_task(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let id = required_id(args, "id")?;
        let mut task = TaskRepository::get_by_id(pool, id)
            .await
            .map_err(DatabaseError::from)?
            .ok_or(ChatError::TaskNotFound(id))?;

        // Overwrite only the fields present in the arguments.
        if let Some(title) = optional_str(args, "title") {
            task.title = title.to_string();
        }
        if let Some(description) = optional_str(args, "description") {
            task.description = Some(description.to_string());
        }
        if let Some(status) = optional_str(args, "status") {
            task.status = status.parse()?;
        }
        if let Some(priority) = optional_str(args, "priority") {
            task.priority = priority.parse()?;
        }
        if let Some(conversation_id) = args.get("conversation_id").and_then(Value::as_i64) {
            task.conversation_id = Some(conversation_id);
        }

        let updated = TaskRepository::update(pool, &task)
            .await
            .map_err(DatabaseError::from)?;
        Ok(serde_json::to_value(updated)?)
    }

    async fn delete_task(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let id = required_id(args, "id")?;
        let task = TaskRepository::get_by_id(pool, id)
            .await
            .map_err(DatabaseError::from)?
            .ok_or(ChatError::TaskNotFound(id))?;

        TaskRepository::delete(pool, id)
            .await
            .map_err(DatabaseError::from)?;
        Ok(serde_json::to_value(task)?)
    }

    async fn get_task(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let id = required_id(args, "id")?;
        let task = TaskRepository::get_by_id(pool, id)
            .await
            .map_err(DatabaseError::from)?
            .ok_or(ChatError::TaskNotFound(id))?;
        Ok(serde_json::to_value(task)?)
    }

    async fn list_tasks(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let tasks = match optional_str(args, "status") {
            Some(s) => {
                let status = s.parse::<TaskStatus>()?;
                TaskRepository::list_by_status(pool, status)
                    .await
                    .map_err(DatabaseError::from)?
            }
            None => TaskRepository::list(pool).await.map_err(DatabaseError::from)?,
        };
        Ok(serde_json::to_value(tasks)?)
    }

    async fn create_conversation(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let title = required_str(args, "title")?;
        let description = optional_str(args, "description");

        let conversation = ConversationRepository::create(pool, title, description)
            .await
            .map_err(DatabaseError::from)?;
        Ok(serde_json::to_value(conversation)?)
    }

    async fn add_message(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let conversation_id = required_id(args, "conversation_id")?;
        ConversationRepository::get_by_id(pool, conversation_id)
            .await
            .map_err(DatabaseError::from)?
            .ok_or(ChatError::ConversationNotFound(conversation_id))?;

        let content = required_str(args, "content")?;
        if content.chars().count() > 5000 {
            return Err(ChatError::InvalidArgument(
                "Message content must be at most 5000 characters".to_string(),
            ));
        }
        let role = match optional_str(args, "role") {
            Some(s) => s.parse::<Role>()?,
            None => Role::User,
        };

        let message = MessageRepository::create(pool, conversation_id, content, role)
            .await
            .map_err(DatabaseError::from)?;
        Ok(serde_json::to_value(message)?)
    }

    async fn get_conversation(pool: &DatabasePool, args: &Value) -> crate::Result<Value> {
        let id = required_id(args, "id")?;
        let conversation = ConversationRepository::get_by_id(pool, id)
            .await
            .map_err(DatabaseError::from)?
            .ok_or(ChatError::ConversationNotFound(id))?;
        Ok(serde_json::to_value(conversation)?)
    }
}

fn required_str<'a>(args: &'a Value, field: &str) -> crate::Result<&'a str> {
    match args.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ChatError::InvalidArgument(format!(
            "Missing required argument: {}",
            field
        ))),
    }
}

fn optional_str<'a>(args: &'a Value, field: &str) -> Option<&'a str> {
    args.get(field).and_then(Value::as_str)
}

fn required_id(args: &Value, field: &str) -> crate::Result<i64> {
    args.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| ChatError::InvalidArgument(format!("Missing required argument: {}", field)))
}
