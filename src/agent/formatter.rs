//! Response Formatter: tool outcomes rendered as conversational sentences
//!
//! Each outcome becomes one sentence (or a short list block for list_tasks);
//! multiple outcomes are joined with a single space. Formatting never fails:
//! missing fields fall back to the raw outcome message.

use crate::agent::registry::{ToolOutcome, ToolStatus};
use serde_json::Value;

/// Turns tool outcomes into the assistant's reply text
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a batch of outcomes into a single reply
    pub fn format_results(outcomes: &[ToolOutcome]) -> String {
        if outcomes.is_empty() {
            return "Operation completed.".to_string();
        }

        outcomes
            .iter()
            .map(Self::format_outcome)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_outcome(outcome: &ToolOutcome) -> String {
        match outcome.status {
            ToolStatus::Success => Self::format_success(outcome),
            ToolStatus::NotFound => Self::format_not_found(outcome),
            ToolStatus::Error => {
                format!("Sorry, I encountered an error: {}", outcome.message)
            }
            _ => outcome.message.clone(),
        }
    }

    fn format_success(outcome: &ToolOutcome) -> String {
        let null = Value::Null;
        let data = outcome.data.as_ref().unwrap_or(&null);
        match outcome.tool_name.as_str() {
            "list_tasks" => Self::format_task_list(data),
            "get_task" => format!(
                "Task #{}: {} ({})",
                field(data, "id"),
                field(data, "title"),
                field(data, "status")
            ),
            "create_task" | "update_task" => {
                format!("Task updated successfully: {}", field(data, "title"))
            }
            "delete_task" => format!("Task deleted: {}", field(data, "title")),
            "create_conversation" => {
                format!("Conversation created: {}", field(data, "title"))
            }
            "get_conversation" => format!("Conversation: {}", field(data, "title")),
            "add_message" => format!(
                "Message added to conversation #{}",
                field(data, "conversation_id")
            ),
            _ => outcome.message.clone(),
        }
    }

    fn format_task_list(data: &Value) -> String {
        let tasks = match data.as_array() {
            Some(tasks) if !tasks.is_empty() => tasks,
            _ => return "No tasks found.".to_string(),
        };

        let mut lines = vec!["Here are the tasks:".to_string()];
        for task in tasks {
            lines.push(format!(
                "- {}: {} ({})",
                field(task, "id"),
                field(task, "title"),
                field(task, "status")
            ));
        }
        lines.join("\n")
    }

    fn format_not_found(outcome: &ToolOutcome) -> String {
        if outcome.tool_name.contains("task")
            && outcome.message.to_lowercase().contains("not found")
        {
            "I couldn't find that task. Would you like me to list all tasks so you can find the right one?"
                .to_string()
        } else {
            format!("Sorry, {}", outcome.message)
        }
    }
}

/// Render one JSON field as plain text, without quotes around strings
fn field(data: &Value, name: &str) -> String {
    match data.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
