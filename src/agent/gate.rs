//! Confirmation Gate: destructive tool calls require explicit approval
//!
//! Update and delete are gated; all other tools execute immediately. The
//! gate is stateless: it only classifies calls and renders the confirmation
//! prompt, the caller decides whether to bypass it.

use crate::agent::registry::ToolCall;
use serde_json::Value;

/// Classifies tool calls as destructive and renders confirmation prompts
pub struct ConfirmationGate;

impl ConfirmationGate {
    /// Whether this call must be confirmed before execution
    pub fn needs_confirmation(call: &ToolCall) -> bool {
        matches!(call.name.as_str(), "update_task" | "delete_task")
    }

    /// Render the confirmation prompt shown to the user for a gated call
    pub fn format_confirmation(call: &ToolCall) -> String {
        match call.name.as_str() {
            "delete_task" => format!(
                "I'm about to delete task #{}. Is that OK?",
                render_value(&call.arguments["id"])
            ),
            "update_task" => {
                let changes = call
                    .arguments
                    .as_object()
                    .map(|obj| {
                        obj.iter()
                            .filter(|(k, _)| k.as_str() != "id")
                            .map(|(k, v)| format!("{}={}", k, render_value(v)))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                format!(
                    "I'm about to update task #{} with {}. Is that OK?",
                    render_value(&call.arguments["id"]),
                    changes
                )
            }
            _ => format!(
                "I'm about to execute '{}' with arguments {}. Please confirm.",
                call.name, call.arguments
            ),
        }
    }
}

/// Render a JSON value without the quotes `Display` puts around strings
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
