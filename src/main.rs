mod routes;
mod services;
mod state;

use services::auth_status::{AuthStatusClient, AuthStatusConfig};
use state::{AppState, AuthState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = AuthStatusConfig::from_env();
    tracing::info!(auth_service = %config.base_url, "auth status endpoint configured");

    let auth = AuthState::new();
    let status = AuthStatusClient::new(&config, auth.clone())
        .expect("auth status client init failed");
    let state = AppState::new(auth, status);

    // Spawn background auth-state watcher.
    let _watcher = services::watcher::spawn_status_watcher(&state.auth);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gatehouse listening");
    axum::serve(listener, app).await.expect("server failed");
}
