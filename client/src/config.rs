//! Client configuration resolved at build time.
//!
//! The backend base URL comes from `SMARTPLATE_BACKEND_URL` when the WASM
//! bundle is compiled; the REST API lives under `/api` on that host. With no
//! value set the API is assumed to be same-origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const BACKEND_URL_ENV: Option<&str> = option_env!("SMARTPLATE_BACKEND_URL");

/// Settings shared with pages through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Configuration baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self { api_base_url: api_base_url(BACKEND_URL_ENV) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Derive the API base URL (`{backend}/api`) from an optional backend URL.
fn api_base_url(backend_url: Option<&str>) -> String {
    let backend = backend_url.map(str::trim).unwrap_or_default().trim_end_matches('/');
    format!("{backend}/api")
}
