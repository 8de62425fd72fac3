//! Auth status client — asks the remote auth service about the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote auth service owns sessions, tokens, and credentials. This
//! process asks it exactly one question per protected request: is the session
//! behind these cookies authenticated? The answer lands in [`AuthState`] and
//! drives the route guard's redirect decision.
//!
//! ERROR HANDLING
//! ==============
//! Callers always get a plain `bool`. Network errors, non-success statuses,
//! and malformed bodies are logged and collapsed to `false`; no error kind
//! crosses the public boundary of [`AuthStatusClient::check_auth`].

use std::time::Duration;

use crate::state::AuthState;

const STATUS_PATH: &str = "/auth/status/";

pub const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// CONFIG
// =============================================================================

/// Remote auth service configuration loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStatusConfig {
    /// Base URL of the auth service, no trailing slash.
    pub base_url: String,
    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Outbound connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl AuthStatusConfig {
    /// Build the config from environment variables, all optional:
    ///
    /// - `AUTH_SERVICE_URL`: base URL of the auth service
    ///   (default `http://localhost:8000`)
    /// - `AUTH_STATUS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_STATUS_CONNECT_TIMEOUT_SECS`: default 5
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("AUTH_SERVICE_URL")
            .map(|raw| normalize_base_url(&raw))
            .unwrap_or_else(|_| DEFAULT_AUTH_SERVICE_URL.to_string());
        Self {
            base_url,
            request_timeout_secs: env_parse("AUTH_STATUS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse("AUTH_STATUS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Full URL of the status endpoint.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR
// =============================================================================

/// Failure legs of a status check. Logged, then collapsed to `false`; never
/// returned from `check_auth`.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The HTTP request to the auth service failed outright.
    #[error("status request failed: {0}")]
    Request(String),

    /// The auth service answered with a non-success status.
    #[error("status endpoint returned {status}")]
    Status { status: u16 },

    /// The response body could not be read or deserialized.
    #[error("status response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Deserialize)]
struct StatusResponse {
    /// Absent means unauthenticated; that is the endpoint's contract.
    #[serde(default)]
    is_authenticated: bool,
}

// =============================================================================
// CLIENT
// =============================================================================

/// Client for the auth service's status endpoint.
///
/// Holds a handle to the shared [`AuthState`] and overwrites it with the
/// resolved value on every call, success and failure paths alike.
#[derive(Clone)]
pub struct AuthStatusClient {
    http: reqwest::Client,
    status_url: String,
    auth: AuthState,
}

impl AuthStatusClient {
    /// Build the client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AuthStatusConfig, auth: AuthState) -> Result<Self, StatusError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| StatusError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, status_url: config.status_url(), auth })
    }

    /// Ask the auth service whether the session behind `cookies` is
    /// authenticated.
    ///
    /// The inbound `Cookie` header is forwarded verbatim so the auth service
    /// sees the browser's own credentials. Any failure resolves to `false`.
    /// The resolved value overwrites [`AuthState`] before it is returned.
    pub async fn check_auth(&self, cookies: Option<&str>) -> bool {
        let authenticated = match self.fetch_status(cookies).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, url = %self.status_url, "auth status check failed");
                false
            }
        };
        self.auth.set(authenticated);
        authenticated
    }

    async fn fetch_status(&self, cookies: Option<&str>) -> Result<bool, StatusError> {
        let mut request = self.http.get(&self.status_url);
        if let Some(cookies) = cookies {
            request = request.header(reqwest::header::COOKIE, cookies);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StatusError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::Status { status: status.as_u16() });
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| StatusError::Parse(e.to_string()))?;
        Ok(body.is_authenticated)
    }
}

#[cfg(test)]
#[path = "auth_status_test.rs"]
mod tests;
