//! Auth transport: HTTP-backed service plus the startup-selected facade.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`AuthError::Unavailable`] since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use super::config::{ApiConfig, AuthBackend};
use super::error::AuthError;
use super::mock_auth::MockAuthService;
use super::token;
use super::types::{AuthResponse, LoginData, RegisterData, User};

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// HTTP auth transport against `{base_url}/auth/*`.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    base_url: String,
}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `POST {base_url}/auth/login`. On success the token is persisted
    /// before the call resolves.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] with the error body's `message` (or a fixed
    /// fallback) on non-2xx; [`AuthError::Network`] otherwise.
    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, AuthError> {
        self.post_auth("login", data, LOGIN_FALLBACK).await
    }

    /// `POST {base_url}/auth/register`, same response handling as login.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`], with the registration fallback message.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, AuthError> {
        self.post_auth("register", data, REGISTER_FALLBACK).await
    }

    /// Delete the stored token. No endpoint is called.
    pub async fn logout(&self) {
        token::clear_token();
    }

    /// `GET {base_url}/auth/me` with the bearer token — the startup session
    /// validation round-trip. A 401 means the token is stale: it is cleared
    /// and the caller stays anonymous.
    pub async fn current_user(&self, bearer: &str) -> Result<Option<User>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/auth/me", self.base_url);
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {bearer}"))
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if resp.status() == 401 {
                token::clear_token();
                return Ok(None);
            }
            if !resp.ok() {
                return Err(AuthError::Network(format!("status {}", resp.status())));
            }
            let user = resp
                .json::<User>()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            Ok(Some(user))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = bearer;
            Err(AuthError::Unavailable)
        }
    }

    async fn post_auth<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        fallback: &str,
    ) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/auth/{endpoint}", self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;

            if !resp.ok() {
                let message = resp
                    .json::<super::types::ApiError>()
                    .await
                    .ok()
                    .map(|e| e.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| fallback.to_owned());
                return Err(AuthError::Rejected(message));
            }

            let result = resp
                .json::<AuthResponse>()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            token::store_token(&result.token);
            Ok(result)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body, fallback);
            Err(AuthError::Unavailable)
        }
    }
}

/// The auth transport in use for this build: real HTTP or the in-memory
/// mock, selected once at startup from configuration.
#[derive(Debug)]
pub enum AuthService {
    Http(HttpAuthService),
    Mock(MockAuthService),
}

impl AuthService {
    /// Construct the transport the configuration asks for.
    pub fn from_config(config: &ApiConfig) -> Self {
        match config.backend {
            AuthBackend::Http => Self::Http(HttpAuthService::new(config.base_url.clone())),
            AuthBackend::Mock => Self::Mock(MockAuthService::new()),
        }
    }

    /// Exchange credentials for a user and session token.
    ///
    /// # Errors
    ///
    /// Propagates the underlying transport failure.
    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, AuthError> {
        match self {
            Self::Http(http) => http.login(data).await,
            Self::Mock(mock) => mock.login(data).await,
        }
    }

    /// Create an account and exchange it for a user and session token.
    ///
    /// # Errors
    ///
    /// Propagates the underlying transport failure.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, AuthError> {
        match self {
            Self::Http(http) => http.register(data).await,
            Self::Mock(mock) => mock.register(data).await,
        }
    }

    /// End the transport-side session. Token/user cleanup beyond what the
    /// transport itself does is the session store's responsibility.
    pub async fn logout(&self) {
        match self {
            Self::Http(http) => http.logout().await,
            Self::Mock(mock) => mock.logout().await,
        }
    }

    /// Resolve the stored token to its user, if the transport can.
    ///
    /// # Errors
    ///
    /// Propagates the underlying transport failure.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let Some(bearer) = token::stored_token() else {
            return Ok(None);
        };
        match self {
            Self::Http(http) => http.current_user(&bearer).await,
            Self::Mock(mock) => mock.current_user(&bearer).await,
        }
    }

    /// The persisted session token, if any.
    pub fn token(&self) -> Option<String> {
        token::stored_token()
    }

    /// Whether a token is currently persisted. This is the transport-level
    /// view; the session store derives its own flag from the held user.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
