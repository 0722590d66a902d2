//! Integration tests for the tool registry
//!
//! These tests verify the full tool catalog against a migrated database:
//! executor behavior, failure conversion, and the declarative schema.

use serde_json::json;
use taskchat::agent::{ToolRegistry, ToolStatus};
use taskchat::db::DatabaseConnection;

async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite needs a single pooled connection so every query sees
    // the same database.
    let db = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");
    db.run_migrations().await.expect("Failed to run migrations");
    db
}

#[test]
fn test_schema_lists_eight_tools() {
    let schema = ToolRegistry::schema();
    assert_eq!(schema.len(), 8);

    let names: Vec<&str> = schema
        .iter()
        .filter_map(|t| t["function"]["name"].as_str())
        .collect();
    assert!(names.contains(&"create_task"));
    assert!(names.contains(&"update_task"));
    assert!(names.contains(&"delete_task"));
    assert!(names.contains(&"get_task"));
    assert!(names.contains(&"list_tasks"));
    assert!(names.contains(&"create_conversation"));
    assert!(names.contains(&"add_message"));
    assert!(names.contains(&"get_conversation"));
}

#[tokio::test]
async fn test_unregistered_tool_is_not_found() {
    let db = setup_test_db().await;

    let outcome = ToolRegistry::execute(db.pool(), "summon_demon", &json!({})).await;
    assert_eq!(outcome.status, ToolStatus::NotFound);
    assert_eq!(outcome.message, "Tool 'summon_demon' not found");
    assert!(outcome.data.is_none());
}

#[tokio::test]
async fn test_create_task_defaults() {
    let db = setup_test_db().await;

    let outcome = ToolRegistry::execute(
        db.pool(),
        "create_task",
        &json!({"title": "Write the report"}),
    )
    .await;
    assert_eq!(outcome.status, ToolStatus::Success);
    assert_eq!(outcome.message, "Tool executed successfully");

    let task = outcome.data.unwrap();
    assert_eq!(task["title"], "Write the report");
    assert_eq!(task["status"], "pending");
    assert_eq!(task["priority"], "medium");
    assert!(task["id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn test_create_task_requires_title() {
    let db = setup_test_db().await;

    let outcome = ToolRegistry::execute(db.pool(), "create_task", &json!({})).await;
    assert_eq!(outcome.status, ToolStatus::Error);
    assert!(outcome.message.contains("title"));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let db = setup_test_db().await;

    let created = ToolRegistry::execute(
        db.pool(),
        "create_task",
        &json!({"title": "Review PR", "description": "Look at the diff", "priority": "high"}),
    )
    .await;
    let created = created.data.unwrap();
    let id = created["id"].as_i64().unwrap();

    let fetched = ToolRegistry::execute(db.pool(), "get_task", &json!({"id": id})).await;
    assert_eq!(fetched.status, ToolStatus::Success);
    assert_eq!(fetched.data.unwrap(), created);
}

#[tokio::test]
async fn test_update_task_merges_only_present_fields() {
    let db = setup_test_db().await;

    let created = ToolRegistry::execute(
        db.pool(),
        "create_task",
        &json!({"title": "Original", "description": "keep me"}),
    )
    .await
    .data
    .unwrap();
    let id = created["id"].as_i64().unwrap();

    let updated = ToolRegistry::execute(
        db.pool(),
        "update_task",
        &json!({"id": id, "status": "completed"}),
    )
    .await;
    assert_eq!(updated.status, ToolStatus::Success);

    let task = updated.data.unwrap();
    assert_eq!(task["status"], "completed");
    assert_eq!(task["title"], "Original");
    assert_eq!(task["description"], "keep me");
}

#[tokio::test]
async fn test_missing_ids_are_not_found_with_id_in_message() {
    let db = setup_test_db().await;

    for tool in ["get_task", "update_task", "delete_task"] {
        let outcome = ToolRegistry::execute(db.pool(), tool, &json!({"id": 123})).await;
        assert_eq!(outcome.status, ToolStatus::NotFound, "tool {}", tool);
        assert_eq!(outcome.message, "Task with ID 123 not found");
    }
}

#[tokio::test]
async fn test_delete_task_returns_the_deleted_record() {
    let db = setup_test_db().await;

    let id = ToolRegistry::execute(db.pool(), "create_task", &json!({"title": "Doomed"}))
        .await
        .data
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let deleted = ToolRegistry::execute(db.pool(), "delete_task", &json!({"id": id})).await;
    assert_eq!(deleted.status, ToolStatus::Success);
    assert_eq!(deleted.data.unwrap()["title"], "Doomed");

    let gone = ToolRegistry::execute(db.pool(), "get_task", &json!({"id": id})).await;
    assert_eq!(gone.status, ToolStatus::NotFound);
}

#[tokio::test]
async fn test_list_tasks_with_status_filter() {
    let db = setup_test_db().await;

    ToolRegistry::execute(db.pool(), "create_task", &json!({"title": "A"})).await;
    ToolRegistry::execute(
        db.pool(),
        "create_task",
        &json!({"title": "B", "status": "completed"}),
    )
    .await;

    let all = ToolRegistry::execute(db.pool(), "list_tasks", &json!({})).await;
    assert_eq!(all.data.unwrap().as_array().unwrap().len(), 2);

    let done =
        ToolRegistry::execute(db.pool(), "list_tasks", &json!({"status": "completed"})).await;
    let done = done.data.unwrap();
    let done = done.as_array().unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0]["title"], "B");
}

#[tokio::test]
async fn test_list_tasks_rejects_invalid_status() {
    let db = setup_test_db().await;

    let outcome =
        ToolRegistry::execute(db.pool(), "list_tasks", &json!({"status": "done"})).await;
    assert_eq!(outcome.status, ToolStatus::Error);
    assert_eq!(outcome.message, "Invalid status: done");
}

#[tokio::test]
async fn test_conversation_tools() {
    let db = setup_test_db().await;

    let conversation = ToolRegistry::execute(
        db.pool(),
        "create_conversation",
        &json!({"title": "Planning", "description": "Sprint planning"}),
    )
    .await;
    assert_eq!(conversation.status, ToolStatus::Success);
    let id = conversation.data.unwrap()["id"].as_i64().unwrap();

    let fetched =
        ToolRegistry::execute(db.pool(), "get_conversation", &json!({"id": id})).await;
    assert_eq!(fetched.status, ToolStatus::Success);
    assert_eq!(fetched.data.unwrap()["title"], "Planning");

    let missing =
        ToolRegistry::execute(db.pool(), "get_conversation", &json!({"id": 999})).await;
    assert_eq!(missing.status, ToolStatus::NotFound);
    assert_eq!(missing.message, "Conversation with ID 999 not found");
}

#[tokio::test]
async fn test_add_message_requires_existing_conversation() {
    let db = setup_test_db().await;

    let orphan = ToolRegistry::execute(
        db.pool(),
        "add_message",
        &json!({"conversation_id": 5, "content": "hi", "role": "user"}),
    )
    .await;
    assert_eq!(orphan.status, ToolStatus::NotFound);
    assert_eq!(orphan.message, "Conversation with ID 5 not found");

    let id = ToolRegistry::execute(
        db.pool(),
        "create_conversation",
        &json!({"title": "Notes"}),
    )
    .await
    .data
    .unwrap()["id"]
        .as_i64()
        .unwrap();

    let added = ToolRegistry::execute(
        db.pool(),
        "add_message",
        &json!({"conversation_id": id, "content": "hello", "role": "assistant"}),
    )
    .await;
    assert_eq!(added.status, ToolStatus::Success);
    let message = added.data.unwrap();
    assert_eq!(message["content"], "hello");
    assert_eq!(message["role"], "assistant");
    assert_eq!(message["conversation_id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_add_message_limit_counts_characters_not_bytes() {
    let db = setup_test_db().await;

    let id = ToolRegistry::execute(
        db.pool(),
        "create_conversation",
        &json!({"title": "Notes"}),
    )
    .await
    .data
    .unwrap()["id"]
        .as_i64()
        .unwrap();

    // 5000 characters but roughly 15000 bytes
    let multibyte = "日".repeat(5000);
    let added = ToolRegistry::execute(
        db.pool(),
        "add_message",
        &json!({"conversation_id": id, "content": multibyte, "role": "user"}),
    )
    .await;
    assert_eq!(added.status, ToolStatus::Success);

    let too_long = "x".repeat(5001);
    let rejected = ToolRegistry::execute(
        db.pool(),
        "add_message",
        &json!({"conversation_id": id, "content": too_long, "role": "user"}),
    )
    .await;
    assert_eq!(rejected.status, ToolStatus::Error);
}
