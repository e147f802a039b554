//! Authenticated-identity handler.

use axum::response::Json;
use tracing::trace;

use crate::data::models::User;
use crate::web::auth::AuthUser;

/// `GET /user/me` — the caller's principal, returned unchanged.
///
/// The `AuthUser` extractor rejects unauthenticated requests with 401
/// before this body runs.
pub(super) async fn me(AuthUser(user): AuthUser) -> Json<User> {
    trace!(uid = %user.uid, "Returning authenticated principal");
    Json(user)
}
