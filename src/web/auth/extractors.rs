//! Authentication guard extractors.

use crate::data::models::User;
use crate::state::AppState;
use crate::web::error::{ApiError, db_error};
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

const SESSION_COOKIE: &str = "session";

/// The authenticated caller.
///
/// Rejects with 401 when no valid session cookie is present, so handlers
/// taking this extractor never run unauthenticated.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            return Err(ApiError::unauthorized());
        };

        match state.session_cache.resolve(&token).await {
            Ok(Some(user)) => Ok(AuthUser(user)),
            Ok(None) => Err(ApiError::unauthorized()),
            Err(e) => Err(db_error("Session lookup", e)),
        }
    }
}

/// Pull the session token out of the request's `Cookie` headers.
/// Malformed cookie pairs are skipped rather than rejected.
fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| cookie::Cookie::split_parse(value.to_owned()))
        .filter_map(|parsed| parsed.ok())
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn extracts_session_from_multi_cookie_header() {
        let headers = headers_with_cookie("theme=dark; session=abc123; lang=en");
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn malformed_pairs_are_skipped() {
        let headers = headers_with_cookie("garbage;; session=tok");
        assert_eq!(session_token(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn other_cookies_do_not_match() {
        let headers = headers_with_cookie("sessionx=nope; xsession=nope");
        assert_eq!(session_token(&headers), None);
    }
}
