use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_list_starts_empty() {
    let app = common::test_app();
    let (status, response) = common::get_json(&app, "/api/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let app = common::test_app();
    let created = common::create_test_task(&app, "Buy milk").await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["completed"], false);
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_ids_ascend() {
    let app = common::test_app();
    let first = common::create_test_task(&app, "first").await;
    let second = common::create_test_task(&app, "second").await;
    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let app = common::test_app();
    let (status, _) = common::post_json(&app, "/api/tasks", r#"{"title":"   "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_then_list_includes_task() {
    let app = common::test_app();
    common::create_test_task(&app, "Buy milk").await;

    let (status, response) = common::get_json(&app, "/api/tasks").await;
    assert_eq!(status, StatusCode::OK);
    let tasks = response.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[0]["completed"], false);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let app = common::test_app();
    for title in ["a", "b", "c"] {
        common::create_test_task(&app, title).await;
    }

    let (_, response) = common::get_json(&app, "/api/tasks").await;
    let titles: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_update_replaces_resource_wholesale() {
    let app = common::test_app();
    let body = serde_json::json!({ "title": "Buy milk", "description": "whole" });
    let (status, created) = common::post_json(&app, "/api/tasks", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["description"], "whole");
    let id = created["id"].as_i64().unwrap();

    // Full replace: the payload has no description, so none survives.
    let body = serde_json::json!({
        "id": id,
        "title": "Buy oat milk",
        "completed": true,
    });
    let (status, updated) =
        common::put_json(&app, &format!("/api/tasks/{id}"), &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Buy oat milk");
    assert_eq!(updated["completed"], true);
    assert!(updated.get("description").is_none());
    // Server-owned fields are preserved/bumped, not taken from the payload.
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].is_string());

    let (_, listed) = common::get_json(&app, "/api/tasks").await;
    assert_eq!(listed[0]["title"], "Buy oat milk");
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let app = common::test_app();
    let body = serde_json::json!({ "id": 99, "title": "ghost", "completed": false });
    let (status, _) = common::put_json(&app, "/api/tasks/99", &body.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_task() {
    let app = common::test_app();
    let created = common::create_test_task(&app, "Buy milk").await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = common::delete(&app, &format!("/api/tasks/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, response) = common::get_json(&app, "/api/tasks").await;
    assert_eq!(response.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_404() {
    let app = common::test_app();
    let (status, _) = common::delete(&app, "/api/tasks/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice_returns_404() {
    let app = common::test_app();
    let created = common::create_test_task(&app, "once").await;
    let id = created["id"].as_i64().unwrap();

    let (first, _) = common::delete(&app, &format!("/api/tasks/{id}")).await;
    let (second, _) = common::delete(&app, &format!("/api/tasks/{id}")).await;
    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NOT_FOUND);
}
