//! End-to-end tests for the campus directory endpoint.
//!
//! Each test runs against an isolated database with the migrations (schema
//! plus the UH campus seed) applied.

mod helpers;

use axum::http::{StatusCode, header};
use campusd::data::campuses;
use helpers::{get, get_json, make_router, read_body};
use sqlx::PgPool;

#[sqlx::test]
async fn list_actual_excludes_retired_entries(pool: PgPool) {
    campuses::upsert(&pool, "OLD", "Closed Extension Campus", false)
        .await
        .expect("upsert failed");

    let listed = campuses::list_actual(&pool).await.expect("list failed");

    assert!(!listed.is_empty(), "seed data should be present");
    assert!(
        listed.iter().all(|c| c.actual),
        "non-actual campuses must not be listed"
    );
    assert!(
        !listed.iter().any(|c| c.code == "OLD" || c.code == "SW"),
        "retired and system-wide entries must be excluded"
    );
}

#[sqlx::test]
async fn list_actual_is_ordered_by_id(pool: PgPool) {
    let listed = campuses::list_actual(&pool).await.expect("list failed");
    let ids: Vec<i32> = listed.iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "listing must be in id order");
}

#[sqlx::test]
async fn campuses_endpoint_mirrors_directory_service(pool: PgPool) {
    let expected = campuses::list_actual(&pool).await.expect("list failed");
    let router = make_router(pool);

    let body = get_json(&router, "/api/campuses", None, StatusCode::OK).await;
    let array = body.as_array().expect("expected a JSON array");

    assert_eq!(array.len(), expected.len());
    for (entry, campus) in array.iter().zip(&expected) {
        assert_eq!(entry["id"], campus.id);
        assert_eq!(entry["code"], campus.code.as_str());
        assert_eq!(entry["description"], campus.description.as_str());
        assert_eq!(entry["actual"], true);
    }
}

#[sqlx::test]
async fn campuses_endpoint_returns_json_content_type(pool: PgPool) {
    let router = make_router(pool);

    let response = get(&router, "/api/campuses", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type: {content_type}"
    );
    assert!(
        response.headers().contains_key("x-request-id"),
        "every response carries a request id"
    );
}

#[sqlx::test]
async fn campuses_endpoint_empty_directory_yields_empty_array(pool: PgPool) {
    sqlx::query("DELETE FROM campuses")
        .execute(&pool)
        .await
        .expect("failed to clear campuses");
    let router = make_router(pool);

    let response = get(&router, "/api/campuses", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_body(response).await, b"[]");
}

#[sqlx::test]
async fn campuses_endpoint_is_idempotent_byte_for_byte(pool: PgPool) {
    let router = make_router(pool);

    let first = read_body(get(&router, "/api/campuses", None).await).await;
    let second = read_body(get(&router, "/api/campuses", None).await).await;

    assert!(!first.is_empty());
    assert_eq!(
        first, second,
        "unchanged data must serialize to identical bytes"
    );
}

#[sqlx::test]
async fn campuses_endpoint_reflects_directory_changes(pool: PgPool) {
    let router = make_router(pool.clone());

    let before = get_json(&router, "/api/campuses", None, StatusCode::OK).await;
    let before_len = before.as_array().expect("array").len();

    campuses::upsert(&pool, "NEW", "New Satellite Campus", true)
        .await
        .expect("upsert failed");

    let after = get_json(&router, "/api/campuses", None, StatusCode::OK).await;
    let after = after.as_array().expect("array");
    assert_eq!(after.len(), before_len + 1);
    assert_eq!(after.last().expect("non-empty")["code"], "NEW");
}

#[sqlx::test]
async fn campuses_endpoint_maps_database_failure_to_500_json(pool: PgPool) {
    let router = make_router(pool.clone());
    pool.close().await;

    let body = get_json(
        &router,
        "/api/campuses",
        None,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(body["code"], "internal_error");
    assert!(body["error"].is_string());
}

#[sqlx::test]
async fn health_endpoint_reports_healthy(pool: PgPool) {
    let router = make_router(pool);

    let body = get_json(&router, "/api/health", None, StatusCode::OK).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[sqlx::test]
async fn status_endpoint_reports_database_connected(pool: PgPool) {
    let router = make_router(pool);

    let body = get_json(&router, "/api/status", None, StatusCode::OK).await;
    assert_eq!(body["database"], "connected");
    assert!(body["version"].is_string());
    assert!(body["commit"].is_string());
}
