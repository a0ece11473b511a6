//! Build-time configuration for the auth transport.
//!
//! The values are compiled in (`option_env!`) because the WASM client has no
//! process environment at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Which auth transport to construct at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthBackend {
    /// Real HTTP calls against the configured API base URL.
    #[default]
    Http,
    /// In-memory mock with simulated latency, for backendless development.
    Mock,
}

impl AuthBackend {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("mock") => Self::Mock,
            _ => Self::Http,
        }
    }
}

/// Transport configuration resolved at compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub backend: AuthBackend,
}

impl ApiConfig {
    /// Configuration from `ACTIVITY_API_URL` / `ACTIVITY_AUTH_BACKEND`,
    /// falling back to the local development defaults.
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("ACTIVITY_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_owned(),
            backend: AuthBackend::parse(option_env!("ACTIVITY_AUTH_BACKEND")),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            backend: AuthBackend::default(),
        }
    }
}
