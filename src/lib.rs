//! Campus directory HTTP service.
//!
//! Exposes the institutional campus directory (`GET /api/campuses`) and the
//! authenticated caller's identity (`GET /user/me`) over a small axum API
//! backed by Postgres.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod state;
pub mod web;
