//! Session token resolution with a short-lived in-memory cache.

use crate::data::models::User;
use crate::data::sessions;
use anyhow::Result;
use dashmap::DashMap;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a resolved session stays valid without re-checking the database.
/// Role changes and revocations take at most this long to propagate.
const CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct CachedSession {
    user: User,
    cached_at: Instant,
    /// Pinned entries never expire and never hit the database (dev bypass).
    pinned: bool,
}

/// Token-to-user cache in front of the `user_sessions` table.
#[derive(Clone)]
pub struct SessionCache {
    pool: PgPool,
    entries: Arc<DashMap<String, CachedSession>>,
}

impl SessionCache {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Resolve a session token to its user.
    ///
    /// Serves from the cache when fresh, otherwise falls through to the
    /// database. Unknown or expired tokens also clear any stale cache entry.
    pub async fn resolve(&self, token: &str) -> Result<Option<User>> {
        // Copy out before awaiting so the shard lock is not held across I/O.
        let cached = self.entries.get(token).and_then(|entry| {
            (entry.pinned || entry.cached_at.elapsed() < CACHE_TTL).then(|| entry.user.clone())
        });
        if let Some(user) = cached {
            return Ok(Some(user));
        }

        match sessions::resolve(&self.pool, token).await? {
            Some(user) => {
                self.entries.insert(
                    token.to_owned(),
                    CachedSession {
                        user: user.clone(),
                        cached_at: Instant::now(),
                        pinned: false,
                    },
                );
                Ok(Some(user))
            }
            None => {
                self.entries.remove(token);
                Ok(None)
            }
        }
    }

    /// Drop all cached sessions for a user so permission changes apply at once.
    #[allow(dead_code)]
    pub fn evict_user(&self, uid: &str) {
        self.entries.retain(|_, entry| entry.user.uid != uid);
    }

    /// Install a fixed token-to-user mapping that bypasses the database.
    /// Debug builds only.
    #[cfg(debug_assertions)]
    pub fn inject_dev_session(&self, token: &str, user: User) {
        self.entries.insert(
            token.to_owned(),
            CachedSession {
                user,
                cached_at: Instant::now(),
                pinned: true,
            },
        );
    }
}
