//! HTTP-level tests for the character and location CRUD endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_character_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({"name": "Mara", "description": "Captain"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Mara");
    assert_eq!(json["description"], "Captain");
    assert!(json["id"].is_number());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_character_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({"name": "", "description": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_characters_preserves_insertion_order(pool: PgPool) {
    for name in ["Mara", "Ilya", "Ode"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/characters", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/characters").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mara", "Ilya", "Ode"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_character_patches_only_present_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/characters",
            serde_json::json!({"name": "Mara", "description": "Captain"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/characters/{id}"),
        serde_json::json!({"name": "Marra"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Marra");
    assert_eq!(json["description"], "Captain");

    // Explicit null clears the description.
    let app = common::build_test_app(pool);
    let json = body_json(
        put_json(
            app,
            &format!("/api/v1/characters/{id}"),
            serde_json::json!({"description": null}),
        )
        .await,
    )
    .await;
    assert_eq!(json["name"], "Marra");
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_character_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/characters/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn location_crud_mirrors_characters(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/locations",
            serde_json::json!({"name": "Harbor", "description": "Foggy"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Harbor");

    let app = common::build_test_app(pool.clone());
    let listed = body_json(get(app, "/api/v1/locations").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let updated = body_json(
        put_json(
            app,
            &format!("/api/v1/locations/{id}"),
            serde_json::json!({"name": "Old Harbor"}),
        )
        .await,
    )
    .await;
    assert_eq!(updated["name"], "Old Harbor");
    assert_eq!(updated["description"], "Foggy");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_location_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/locations", serde_json::json!({"name": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_db_reachable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
