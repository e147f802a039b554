//! Web API module for the campus directory service.

pub mod auth;
pub mod campuses;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod status;
pub mod user;

pub use routes::*;
