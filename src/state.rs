//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the auth flag holder and the status client that refreshes it.
//! `AuthState` wraps a `tokio::sync::watch` channel: one boolean, overwritten
//! on every check, readable without locking, observable by subscribers.

use std::sync::Arc;

use tokio::sync::watch;

use crate::services::auth_status::AuthStatusClient;

// =============================================================================
// AUTH STATE
// =============================================================================

/// Last-known authentication status of the browser session.
///
/// A fresh holder starts at `false`. Writes are last-write-wins with no
/// history. Handlers read through [`AuthState::get`]; observers subscribe
/// through [`AuthState::subscribe`].
#[derive(Clone, Debug)]
pub struct AuthState {
    tx: Arc<watch::Sender<bool>>,
}

impl AuthState {
    /// Fresh holder, defaulting to `false`.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Current value of the flag.
    #[must_use]
    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    /// Overwrite the flag. Every check writes, equal values included.
    pub fn set(&self, authenticated: bool) {
        self.tx.send_replace(authenticated);
    }

    /// Receiver for observing writes to the flag.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide auth flag. The status client holds a handle to the same
    /// channel and overwrites it on every check.
    pub auth: AuthState,
    /// Client for the remote auth service's status endpoint.
    pub status: AuthStatusClient,
}

impl AppState {
    #[must_use]
    pub fn new(auth: AuthState, status: AuthStatusClient) -> Self {
        Self { auth, status }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::auth_status::AuthStatusConfig;

    /// Create a test `AppState` whose status client points at `base_url`.
    #[must_use]
    pub fn test_app_state(base_url: &str) -> AppState {
        let config = AuthStatusConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            request_timeout_secs: 2,
            connect_timeout_secs: 1,
        };
        let auth = AuthState::new();
        let status = AuthStatusClient::new(&config, auth.clone()).expect("status client should build");
        AppState::new(auth, status)
    }
}
