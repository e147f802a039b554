//! Environment-driven configuration.

use serde::Deserialize;

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_shutdown_timeout() -> u64 {
    10
}

/// Application configuration, extracted from the process environment
/// (optionally seeded from a local `.env` via dotenvy).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,

    /// TCP port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base log level for the crate's own modules (`RUST_LOG` overrides).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds to wait for in-flight requests when shutting down.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,

    /// Uid to attach to an injected development session (debug builds only).
    #[serde(default)]
    pub dev_session_uid: Option<String>,
}
