//! Route guard for pages that require an authenticated session.

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_LOCATION: &str = "/login";

/// Middleware for protected pages. Resolves the auth status before the page
/// handler runs; unauthenticated visitors get a `302 Found` to
/// [`LOGIN_LOCATION`].
///
/// Every request triggers a fresh upstream check: no retry, no caching.
pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let cookies = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());

    let authenticated = state.status.check_auth(cookies).await;
    if !authenticated {
        tracing::debug!(path = %request.uri().path(), "unauthenticated visitor, redirecting");
        return found_redirect(LOGIN_LOCATION);
    }

    next.run(request).await
}

/// `302 Found` response. Axum's `Redirect` helpers emit 303/307/308; the
/// login bounce keeps the classic found semantics.
fn found_redirect(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
