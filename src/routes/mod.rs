//! HTTP routes and router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The protected page sits behind the auth guard; the login target and the
//! liveness probe stay outside it so the guard's redirect always has
//! somewhere public to land.

pub mod guard;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{Html, Redirect};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full router: guarded pages plus the public routes.
pub fn app(state: AppState) -> Router {
    let protected: Router<AppState> = Router::new()
        .route("/home", get(home))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::require_auth));

    Router::new()
        .merge(protected)
        .route("/", get(redirect_root_to_home))
        .route("/login", get(login))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /home — the protected page shell. What renders inside the shell
/// belongs to the application behind the gate, not to the guard.
async fn home() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>Home</title></head>\n\
         <body><h1>Home</h1><p>Signed-in area.</p></body>\n</html>",
    )
}

/// GET /login — where unauthenticated visitors land.
async fn login() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>Log in</title></head>\n\
         <body><h1>Log in</h1><p>Sign in with the auth service to continue.</p></body>\n</html>",
    )
}

async fn redirect_root_to_home() -> Redirect {
    Redirect::temporary("/home")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
