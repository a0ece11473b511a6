//! Session store: the owned holder of the current user and loading flag.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth_api::AuthService;
use crate::net::error::AuthError;
use crate::net::token;
use crate::net::types::{LoginData, RegisterData, User};

/// Authentication state: the current user and whether an auth call (or the
/// startup session check) is in flight.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: the startup session check has not resolved yet.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Cloneable session handle, created once at startup and provided via
/// context to every screen that needs auth state. Owns the reactive state
/// and the transport it delegates to.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<AuthState>,
    service: Arc<AuthService>,
}

impl Session {
    pub fn new(service: AuthService) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            service: Arc::new(service),
        }
    }

    /// Startup session check: resolve a stored token to its user via the
    /// transport's whoami call. A missing token, a stale token, or a
    /// transport failure all leave the session anonymous; in every case
    /// loading ends false so the route guard can decide.
    pub async fn init(&self) {
        if let Ok(Some(user)) = self.service.current_user().await {
            self.state.update(|s| s.user = Some(user));
        }
        self.state.update(|s| s.loading = false);
    }

    /// Log in and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Propagates the transport failure to the submitting page; session
    /// state is left unchanged apart from the loading flag.
    pub async fn login(&self, data: &LoginData) -> Result<(), AuthError> {
        self.state.update(|s| s.loading = true);
        let result = self.service.login(data).await;
        self.finish_auth_call(result.map(|resp| resp.user))
    }

    /// Register and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn register(&self, data: &RegisterData) -> Result<(), AuthError> {
        self.state.update(|s| s.loading = true);
        let result = self.service.register(data).await;
        self.finish_auth_call(result.map(|resp| resp.user))
    }

    /// Log out: let the transport run to completion, then unconditionally
    /// clear the persisted token and the held user.
    pub async fn logout(&self) {
        self.service.logout().await;
        token::clear_token();
        self.state.update(|s| s.user = None);
    }

    /// Snapshot of the current user, if any.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// True during startup and any in-flight auth call.
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Derived: authenticated iff a user is held.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    fn finish_auth_call(&self, result: Result<User, AuthError>) -> Result<(), AuthError> {
        match result {
            Ok(user) => {
                self.state.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                self.state.update(|s| s.loading = false);
                Err(err)
            }
        }
    }
}

/// The session provided by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
