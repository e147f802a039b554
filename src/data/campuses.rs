//! Database operations for the `campuses` table.

use crate::data::models::Campus;
use anyhow::{Context, Result};
use sqlx::PgPool;

/// List all campuses that currently operate.
///
/// Ordered by `id` so repeated calls over an unchanged table serialize
/// identically.
pub async fn list_actual(pool: &PgPool) -> Result<Vec<Campus>> {
    let rows = sqlx::query_as::<_, Campus>(
        "SELECT id, code, description, actual FROM campuses WHERE actual = TRUE ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .context("failed to list actual campuses")?;
    Ok(rows)
}

/// Insert or update a campus record, keyed by `code`.
pub async fn upsert(pool: &PgPool, code: &str, description: &str, actual: bool) -> Result<Campus> {
    let row = sqlx::query_as::<_, Campus>(
        r#"
        INSERT INTO campuses (code, description, actual)
        VALUES ($1, $2, $3)
        ON CONFLICT (code)
        DO UPDATE SET description = EXCLUDED.description, actual = EXCLUDED.actual
        RETURNING id, code, description, actual
        "#,
    )
    .bind(code)
    .bind(description)
    .bind(actual)
    .fetch_one(pool)
    .await
    .context("failed to upsert campus")?;
    Ok(row)
}
