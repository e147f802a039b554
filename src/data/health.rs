//! Database liveness probe.

use anyhow::{Context, Result};
use sqlx::PgPool;

/// Round-trip a trivial query to confirm the pool can reach Postgres.
pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("database ping failed")?;
    Ok(())
}
