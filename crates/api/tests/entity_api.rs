//! HTTP-level integration tests for the entity CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Company CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_company_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Acme Industrial"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Acme Industrial");
    assert!(json["id"].is_number());
    assert_eq!(json["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_company_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Get Me"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_company_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/companies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_company_applies_partial_patch(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Original", "email": "kept@example.com"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/companies/{id}"),
        serde_json::json!({"name": "Updated"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    // Fields omitted from the patch keep their previous values.
    assert_eq!(json["email"], "kept@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_company_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = post_json(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Twice"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Twice"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_company_is_hidden_from_default_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": "Winding Down"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/companies/{id}/deactivate")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_active"], false);

    let app = common::build_test_app(pool.clone());
    let listed = body_json(get(app, "/api/v1/companies").await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());

    // Still visible when explicitly requested.
    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/v1/companies?include_inactive=true").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_company_without_dependents_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": "Ephemeral"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_company_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/companies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Company-scoped sub-resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sectors_are_listed_under_their_company(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let company = body_json(
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": "Parent Co"}),
        )
        .await,
    )
    .await;
    let company_id = company["id"].as_i64().unwrap();

    for name in ["Assembly", "Paint"] {
        let app = common::build_test_app(pool.clone());
        let resp = post_json(
            app,
            "/api/v1/sectors",
            serde_json::json!({"company_id": company_id, "name": name}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, &format!("/api/v1/companies/{company_id}/sectors")).await).await;
    let sectors = listed["data"].as_array().unwrap();
    assert_eq!(sectors.len(), 2);
    // Ordered by name.
    assert_eq!(sectors[0]["name"], "Assembly");
    assert_eq!(sectors[1]["name"], "Paint");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn report_settings_upsert_then_get(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let company = body_json(
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": "Branded Co"}),
        )
        .await,
    )
    .await;
    let company_id = company["id"].as_i64().unwrap();

    // No settings yet.
    let app = common::build_test_app(pool.clone());
    let missing = get(app, &format!("/api/v1/companies/{company_id}/report-settings")).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/companies/{company_id}/report-settings"),
        serde_json::json!({"header_text": "Branded Co Maintenance"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["header_text"], "Branded Co Maintenance");
    // Default accent colour applied on first write.
    assert_eq!(json["accent_color"], "#004080");

    // Second write merges rather than replaces.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/companies/{company_id}/report-settings"),
        serde_json::json!({"footer_text": "Page {page}"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["header_text"], "Branded Co Maintenance");
    assert_eq!(json["footer_text"], "Page {page}");
}
