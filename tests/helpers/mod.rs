//! Shared scaffolding for integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use campusd::data::models::User;
use campusd::data::sessions;
use campusd::state::AppState;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build the full application router over a test pool.
pub fn make_router(pool: PgPool) -> Router {
    campusd::web::create_router(AppState::new(pool))
}

/// Insert a user with the given roles.
pub async fn seed_user(pool: &PgPool, uid: &str, username: &str, roles: &[&str]) -> User {
    let roles: Vec<String> = roles.iter().map(|r| (*r).to_owned()).collect();
    sessions::upsert_user(pool, uid, username, &roles)
        .await
        .expect("failed to seed user")
}

/// Insert a session for `uid` expiring `ttl_secs` from now (negative for
/// an already-expired session).
pub async fn seed_session(pool: &PgPool, token: &str, uid: &str, ttl_secs: i64) {
    sessions::insert(pool, token, uid, Utc::now() + Duration::seconds(ttl_secs))
        .await
        .expect("failed to seed session");
}

/// Issue a GET against the router, optionally with a `Cookie` header.
pub async fn get(router: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).expect("failed to build request");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("router returned an error")
}

/// Read a response body to completion.
pub async fn read_body(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec()
}

/// Issue a GET and decode the body as JSON, asserting the expected status.
pub async fn get_json(
    router: &Router,
    path: &str,
    cookie: Option<&str>,
    expected: StatusCode,
) -> serde_json::Value {
    let response = get(router, path, cookie).await;
    assert_eq!(response.status(), expected, "unexpected status for {path}");
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("body was not valid JSON")
}
