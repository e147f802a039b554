//! Row types shared across the data layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A campus directory record.
///
/// `actual` marks campuses that currently operate; retired or purely
/// administrative entries keep their row but are excluded from the
/// public listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Campus {
    pub id: i32,
    pub code: String,
    pub description: String,
    pub actual: bool,
}

/// The authenticated principal, as returned by `GET /user/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub uid: String,
    pub username: String,
    pub roles: Vec<String>,
}

/// A server-side login session row.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: String,
    pub uid: String,
    pub expires_at: DateTime<Utc>,
}
