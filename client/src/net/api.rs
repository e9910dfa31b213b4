//! REST calls to the SmartPlate backend auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpAuthApi` reports
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (rejection, transport, decode) surfaces as an
//! [`ApiError`]; pages turn it into a toast with
//! [`ApiError::user_message`] and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{AuthResponse, LoginRequest, RegisterRequest};

/// Failure of an auth API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is not available in this build (SSR or native).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the backend's detail when present, else
    /// `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// The two backend operations the auth page needs.
///
/// Pages are generic over this trait so sign-in/sign-up flows can be driven by
/// a fake in tests.
pub trait AuthApi {
    /// `POST {API}/auth/login`.
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    /// `POST {API}/auth/register`.
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

/// [`AuthApi`] backed by `fetch` against a configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    /// Create a client for `base_url` (e.g. `https://api.example.org/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn login_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/login")
}

fn register_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection_from_body(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|body| body.message());
    ApiError::Rejected { status, detail }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<AuthResponse, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(rejection_from_body(resp.status(), &body));
    }
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = login_endpoint(&self.base_url);
        #[cfg(feature = "hydrate")]
        {
            post_json(&url, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = register_endpoint(&self.base_url);
        #[cfg(feature = "hydrate")]
        {
            post_json(&url, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }
}
