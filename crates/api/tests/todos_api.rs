//! HTTP-level integration tests for the todo endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, delete_json, get, patch_json, post, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_todo_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"text": "Learn the system"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["text"], "Learn the system");
    assert_eq!(json["completed"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_whitespace_text_returns_400_and_inserts_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/todos", serde_json::json!({"text": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/todos").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_list_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/todos").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_then_get_returns_equal_records(pool: PgPool) {
    for text in ["first", "second"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/todos", serde_json::json!({"text": text})).await;
    }

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/api/v1/todos").await).await;
    let records = list.as_array().unwrap();
    assert_eq!(records.len(), 2);

    for record in records {
        let id = record["id"].as_i64().unwrap();
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/todos?id={id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_json(response).await, record);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/todos?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_malformed_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/todos?id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_with_no_fields_returns_400_and_leaves_row_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/todos", serde_json::json!({"text": "untouched"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/api/v1/todos", serde_json::json!({"id": id})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let stored = body_json(get(app, &format!("/api/v1/todos?id={id}")).await).await;
    assert_eq!(stored, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_text_only_leaves_completed_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/todos", serde_json::json!({"text": "before"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Mark completed first so retention is observable.
    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"id": id, "completed": true}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"id": id, "text": "after"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["text"], "after");
    assert_eq!(json["completed"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_missing_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"completed": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"id": 999999, "completed": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_toggle_inverts_server_side(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/todos", serde_json::json!({"text": "flip me"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/api/v1/todos/{id}/toggle")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["completed"], true);

    let app = common::build_test_app(pool);
    let response = post(app, &format!("/api/v1/todos/{id}/toggle")).await;
    assert_eq!(body_json(response).await["completed"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_toggle_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(app, "/api/v1/todos/999999/toggle").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_via_query_returns_prior_state(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/todos", serde_json::json!({"text": "doomed"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/todos?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/todos?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_via_body_is_supported(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/todos", serde_json::json!({"text": "body id"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = delete_json(app, "/api/v1/todos", serde_json::json!({"id": id})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_without_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/todos").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/todos?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_patch_delete_get_lifecycle(pool: PgPool) {
    // POST {text: "Learn the system"} -> 201 with completed: false.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"text": "Learn the system"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["completed"], false);

    // PATCH {id, completed: true} -> 200, text unchanged.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/v1/todos",
        serde_json::json!({"id": id, "completed": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["text"], "Learn the system");

    // DELETE ?id= -> 200 with the pre-delete record.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/todos?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, updated);

    // GET ?id= -> 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/todos?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
