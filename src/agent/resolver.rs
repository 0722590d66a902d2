//! Intent Resolver: keyword and regex rules mapping free text to tool calls
//!
//! Rules are evaluated in a fixed priority order over the lowercased input;
//! the first matching rule wins. Messages that match no rule resolve to
//! `None` and the agent falls back to a generic reply.

use crate::agent::registry::ToolCall;
use regex::Regex;
use serde_json::json;

/// Rule-based resolver from a user message to at most one tool call
pub struct IntentResolver {
    id_pattern: Regex,
    status_pattern: Regex,
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentResolver {
    pub fn new() -> Self {
        // Both patterns are literals known to compile.
        Self {
            id_pattern: Regex::new(r"#(\d+)").unwrap(),
            status_pattern: Regex::new(r"(pending|in_progress|completed)").unwrap(),
        }
    }

    /// Resolve a user message to a tool call, or `None` when no rule matches
    pub fn resolve(&self, message: &str) -> Option<ToolCall> {
        let text = message.to_lowercase();

        if text.contains("create") && (text.contains("task") || text.contains("new")) {
            return Some(self.resolve_create(&text));
        }

        if text.contains("update") && text.contains("task") {
            let id = self.extract_id(&text)?;
            let status = self
                .status_pattern
                .find(&text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| "in_progress".to_string());
            return Some(ToolCall::new(
                "update_task",
                json!({"id": id, "status": status}),
            ));
        }

        if text.contains("delete") && text.contains("task") {
            let id = self.extract_id(&text)?;
            return Some(ToolCall::new("delete_task", json!({"id": id})));
        }

        if text.contains("show") || text.contains("list") || text.contains("all") {
            let mut args = json!({});
            if let Some(status) = Self::status_filter(&text) {
                args["status"] = json!(status);
            }
            return Some(ToolCall::new("list_tasks", args));
        }

        if (text.contains("get") || text.contains("show") || text.contains("what"))
            && text.contains("task")
        {
            let id = self.extract_id(&text)?;
            return Some(ToolCall::new("get_task", json!({"id": id})));
        }

        None
    }

    /// The creation rule takes the literal substring after the first "to"
    /// occurrence (or, when "to" appears nowhere, the first "for"), trimmed,
    /// defaulting to "New task".
    fn resolve_create(&self, text: &str) -> ToolCall {
        let title = text
            .split_once("to")
            .or_else(|| text.split_once("for"))
            .map(|(_, rest)| rest.trim())
            .filter(|t| !t.is_empty())
            .unwrap_or("New task");
        ToolCall::new("create_task", json!({"title": title, "status": "pending"}))
    }

    fn extract_id(&self, text: &str) -> Option<i64> {
        self.id_pattern
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    fn status_filter(text: &str) -> Option<&'static str> {
        if text.contains("pending") {
            Some("pending")
        } else if text.contains("in progress") || text.contains("in_progress") {
            Some("in_progress")
        } else if text.contains("completed") {
            Some("completed")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(message: &str) -> Option<ToolCall> {
        IntentResolver::new().resolve(message)
    }

    #[test]
    fn test_create_extracts_title_after_to() {
        let call = resolve("Create a task to implement user authentication").unwrap();
        assert_eq!(call.name, "create_task");
        assert_eq!(call.arguments["title"], "implement user authentication");
        assert_eq!(call.arguments["status"], "pending");
    }

    #[test]
    fn test_create_splits_on_first_to_occurrence_even_inside_a_word() {
        let call = resolve("create task tomorrow to buy milk").unwrap();
        assert_eq!(call.name, "create_task");
        assert_eq!(call.arguments["title"], "morrow to buy milk");
    }

    #[test]
    fn test_create_falls_back_to_for() {
        let call = resolve("create a new task for reviewing the roadmap").unwrap();
        assert_eq!(call.name, "create_task");
        assert_eq!(call.arguments["title"], "reviewing the roadmap");
    }

    #[test]
    fn test_create_defaults_title() {
        let call = resolve("create a new task").unwrap();
        assert_eq!(call.name, "create_task");
        assert_eq!(call.arguments["title"], "New task");
    }

    #[test]
    fn test_update_requires_id() {
        assert!(resolve("update the task please").is_none());

        let call = resolve("update task #12 to completed").unwrap();
        assert_eq!(call.name, "update_task");
        assert_eq!(call.arguments["id"], 12);
        assert_eq!(call.arguments["status"], "completed");
    }

    #[test]
    fn test_update_defaults_status_to_in_progress() {
        let call = resolve("update task #3").unwrap();
        assert_eq!(call.arguments["status"], "in_progress");
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(resolve("delete that task").is_none());

        let call = resolve("delete task #2").unwrap();
        assert_eq!(call.name, "delete_task");
        assert_eq!(call.arguments["id"], 2);
    }

    #[test]
    fn test_list_with_and_without_filter() {
        let call = resolve("show me all my tasks").unwrap();
        assert_eq!(call.name, "list_tasks");
        assert!(call.arguments.get("status").is_none());

        let call = resolve("list completed tasks").unwrap();
        assert_eq!(call.arguments["status"], "completed");

        let call = resolve("show tasks that are in progress").unwrap();
        assert_eq!(call.arguments["status"], "in_progress");
    }

    #[test]
    fn test_list_takes_priority_over_get() {
        // "show ... task #5" still matches the list rule first because of
        // the rule ordering; only phrasings without show/list/all fall
        // through to get_task.
        let call = resolve("what is task #5").unwrap();
        assert_eq!(call.name, "get_task");
        assert_eq!(call.arguments["id"], 5);
    }

    #[test]
    fn test_unrecognized_message_resolves_to_none() {
        assert!(resolve("hello there").is_none());
        assert!(resolve("how is the weather").is_none());
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let call = resolve("DELETE TASK #9").unwrap();
        assert_eq!(call.name, "delete_task");
        assert_eq!(call.arguments["id"], 9);
    }
}
