//! Application state shared across the web layer.

use crate::web::auth::session::SessionCache;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub session_cache: SessionCache,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            session_cache: SessionCache::new(db_pool.clone()),
            db_pool,
        }
    }
}
