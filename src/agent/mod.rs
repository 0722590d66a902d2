//! Task Agent: rule-based natural-language front-end over the task tools
//!
//! The agent resolves a user message to a tool call, routes gated calls
//! through the confirmation flow, executes through the registry, and renders
//! the reply through the formatter. It holds no per-turn state; confirmation
//! is driven by the caller's bypass flag.

pub mod formatter;
pub mod gate;
pub mod registry;
pub mod resolver;

pub use formatter::ResponseFormatter;
pub use gate::ConfirmationGate;
pub use registry::{ToolCall, ToolOutcome, ToolRegistry, ToolStatus};
pub use resolver::IntentResolver;

use crate::db::connection::DatabasePool;

/// Reply for a message that matches no resolver rule
pub const FALLBACK_REPLY: &str = "I'm not sure how to help with that.";

/// Orchestrates resolver, gate, registry, and formatter for one message
pub struct TaskAgent {
    resolver: IntentResolver,
}

impl Default for TaskAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskAgent {
    pub fn new() -> Self {
        Self {
            resolver: IntentResolver::new(),
        }
    }

    /// Resolve a message to a tool call without executing it
    pub fn resolve(&self, message: &str) -> Option<ToolCall> {
        self.resolver.resolve(message)
    }

    /// Execute a batch of tool calls in order
    ///
    /// Gated calls execute only when `bypass_confirmation` is set; otherwise
    /// they produce a `PendingConfirmation` placeholder outcome.
    pub async fn execute_calls(
        &self,
        pool: &DatabasePool,
        calls: &[ToolCall],
        bypass_confirmation: bool,
    ) -> Vec<ToolOutcome> {
        let mut outcomes = Vec::with_capacity(calls.len());
        for call in calls {
            if ConfirmationGate::needs_confirmation(call) && !bypass_confirmation {
                outcomes.push(ToolOutcome::pending_confirmation(&call.name));
                continue;
            }
            outcomes.push(ToolRegistry::execute(pool, &call.name, &call.arguments).await);
        }
        outcomes
    }

    /// Run one full turn: resolve, gate, execute, format
    ///
    /// Always returns a reply string; tool failures surface as formatted
    /// apology sentences, never as errors.
    pub async fn handle_message(
        &self,
        pool: &DatabasePool,
        message: &str,
        bypass_confirmation: bool,
    ) -> String {
        let call = match self.resolve(message) {
            Some(call) => call,
            None => return FALLBACK_REPLY.to_string(),
        };

        if ConfirmationGate::needs_confirmation(&call) && !bypass_confirmation {
            return ConfirmationGate::format_confirmation(&call);
        }

        tracing::debug!("Executing tool '{}' for message", call.name);
        let outcomes = self.execute_calls(pool, &[call], bypass_confirmation).await;
        ResponseFormatter::format_results(&outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConnection;

    async fn setup() -> DatabaseConnection {
        let db = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
            .await
            .unwrap();
        db.run_migrations().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_fallback_reply() {
        let db = setup().await;
        let agent = TaskAgent::new();
        let reply = agent.handle_message(db.pool(), "good morning", false).await;
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let db = setup().await;
        let agent = TaskAgent::new();

        let reply = agent
            .handle_message(db.pool(), "Create a task to water the plants", false)
            .await;
        assert_eq!(reply, "Task updated successfully: water the plants");

        let reply = agent.handle_message(db.pool(), "show all tasks", false).await;
        assert_eq!(reply, "Here are the tasks:\n- 1: water the plants (pending)");
    }

    #[tokio::test]
    async fn test_gated_call_prompts_without_bypass() {
        let db = setup().await;
        let agent = TaskAgent::new();

        let reply = agent.handle_message(db.pool(), "delete task #2", false).await;
        assert_eq!(reply, "I'm about to delete task #2. Is that OK?");
    }

    #[tokio::test]
    async fn test_gated_call_executes_with_bypass() {
        let db = setup().await;
        let agent = TaskAgent::new();

        agent
            .handle_message(db.pool(), "create a task to tidy up", false)
            .await;
        let reply = agent.handle_message(db.pool(), "delete task #1", true).await;
        assert_eq!(reply, "Task deleted: tidy up");
    }

    #[tokio::test]
    async fn test_missing_task_gets_suggestion() {
        let db = setup().await;
        let agent = TaskAgent::new();

        let reply = agent.handle_message(db.pool(), "what is task #42", false).await;
        assert_eq!(
            reply,
            "I couldn't find that task. Would you like me to list all tasks so you can find the right one?"
        );
    }

    #[tokio::test]
    async fn test_execute_calls_pending_placeholder() {
        let db = setup().await;
        let agent = TaskAgent::new();

        let calls = [ToolCall::new("delete_task", serde_json::json!({"id": 1}))];
        let outcomes = agent.execute_calls(db.pool(), &calls, false).await;
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, ToolStatus::PendingConfirmation);
    }
}
