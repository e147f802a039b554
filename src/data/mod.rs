//! Database models and queries.

pub mod campuses;
pub mod health;
pub mod models;
pub mod sessions;
