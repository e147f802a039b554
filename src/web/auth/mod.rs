//! Session-based authentication.
//!
//! Login happens in the institutional SSO front end; this service only
//! validates the `session` cookie it is handed. The guard is an axum
//! extractor, so unauthenticated requests are rejected before the
//! handler body runs.

pub mod extractors;
pub mod session;

pub use extractors::AuthUser;
