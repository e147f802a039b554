//! Database operations for login sessions.
//!
//! Sessions are provisioned out of band (the login flow lives in the
//! institutional SSO front end, not in this service); this layer only
//! resolves and expires them.

use crate::data::models::{Session, User};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Resolve a session token to its user, if the session exists and has not
/// expired. Expired sessions are treated exactly like unknown tokens.
pub async fn resolve(pool: &PgPool, token: &str) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, User>(
        r#"
        SELECT u.uid, u.username, u.roles
        FROM user_sessions s
        JOIN users u ON u.uid = s.uid
        WHERE s.token = $1 AND s.expires_at > now()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
    .context("failed to resolve session")?;
    Ok(row)
}

/// Insert a session row. Session creation normally happens in the SSO
/// front end; this exists for provisioning and tests.
pub async fn insert(
    pool: &PgPool,
    token: &str,
    uid: &str,
    expires_at: DateTime<Utc>,
) -> Result<Session> {
    let row = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO user_sessions (token, uid, expires_at)
        VALUES ($1, $2, $3)
        RETURNING token, uid, expires_at
        "#,
    )
    .bind(token)
    .bind(uid)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .context("failed to insert session")?;
    Ok(row)
}

/// Delete expired sessions. Returns how many rows were removed.
pub async fn purge_expired(pool: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM user_sessions WHERE expires_at <= now()")
        .execute(pool)
        .await
        .context("failed to purge expired sessions")?;
    Ok(result.rows_affected())
}

/// Upsert a user row. Keyed by `uid`.
pub async fn upsert_user(
    pool: &PgPool,
    uid: &str,
    username: &str,
    roles: &[String],
) -> Result<User> {
    let row = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (uid, username, roles)
        VALUES ($1, $2, $3)
        ON CONFLICT (uid)
        DO UPDATE SET username = EXCLUDED.username, roles = EXCLUDED.roles
        RETURNING uid, username, roles
        "#,
    )
    .bind(uid)
    .bind(username)
    .bind(roles)
    .fetch_one(pool)
    .await
    .context("failed to upsert user")?;
    Ok(row)
}
