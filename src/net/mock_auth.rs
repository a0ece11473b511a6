//! In-memory auth transport for environments without a backend.
//!
//! Simulates the login/registration API against a mutable user list seeded
//! with one fixture account, with artificial latency in the browser. Login
//! failures use one message for both unknown email and wrong password so the
//! response does not leak which check failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_auth_test.rs"]
mod mock_auth_test;

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

use super::error::AuthError;
use super::types::{AuthResponse, LoginData, RegisterData, User};

/// Fixture account present in every fresh mock.
pub const FIXTURE_EMAIL: &str = "test@example.com";
pub const FIXTURE_PASSWORD: &str = "password123";
pub const FIXTURE_USERNAME: &str = "testuser";

/// Shared failure message for unknown email and wrong password.
pub const INVALID_CREDENTIALS: &str = "Email or password is incorrect";
pub const DUPLICATE_EMAIL: &str = "This email is already registered";
pub const DUPLICATE_USERNAME: &str = "This username is already taken";

const LOGIN_DELAY_MS: u32 = 1000;
const LOGOUT_DELAY_MS: u32 = 500;

/// A registered account, password included. Never leaves this module;
/// responses carry only the public [`User`] profile.
#[derive(Clone, Debug)]
struct MockUser {
    id: String,
    email: String,
    password: String,
    username: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: String,
}

impl MockUser {
    fn profile(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Mock auth service over an in-memory user list.
///
/// The list is mutated in place on registration; the mutex keeps the service
/// `Sync` for contexts that require it (single-threaded in the browser, but
/// host-side tests run threaded).
#[derive(Debug)]
pub struct MockAuthService {
    users: Mutex<Vec<MockUser>>,
    /// Token -> user id, so a stored token can be resolved at startup.
    sessions: Mutex<HashMap<String, String>>,
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuthService {
    /// A fresh mock seeded with the fixture account.
    pub fn new() -> Self {
        let fixture = MockUser {
            id: "1".to_owned(),
            email: FIXTURE_EMAIL.to_owned(),
            password: FIXTURE_PASSWORD.to_owned(),
            username: FIXTURE_USERNAME.to_owned(),
            first_name: Some("Test".to_owned()),
            last_name: Some("User".to_owned()),
            created_at: now_iso8601(),
        };
        Self {
            users: Mutex::new(vec![fixture]),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Scan for a matching email, then compare the password.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] with [`INVALID_CREDENTIALS`] when no user
    /// matches or the password differs.
    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, AuthError> {
        delay_ms(LOGIN_DELAY_MS).await;

        let users = self.users.lock().expect("mock user list lock");
        let user = users.iter().find(|u| u.email == data.email);
        let Some(user) = user else {
            return Err(AuthError::Rejected(INVALID_CREDENTIALS.to_owned()));
        };
        if user.password != data.password {
            return Err(AuthError::Rejected(INVALID_CREDENTIALS.to_owned()));
        }

        let token = generate_token();
        let profile = user.profile();
        drop(users);
        self.record_session(&token, &profile.id);
        Ok(AuthResponse { user: profile, token })
    }

    /// Append a new account if neither the email nor the username is taken.
    /// The email check runs first, so it wins when both collide.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] with [`DUPLICATE_EMAIL`] or
    /// [`DUPLICATE_USERNAME`].
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, AuthError> {
        delay_ms(LOGIN_DELAY_MS).await;

        let mut users = self.users.lock().expect("mock user list lock");
        if users.iter().any(|u| u.email == data.email) {
            return Err(AuthError::Rejected(DUPLICATE_EMAIL.to_owned()));
        }
        if users.iter().any(|u| u.username == data.username) {
            return Err(AuthError::Rejected(DUPLICATE_USERNAME.to_owned()));
        }

        let new_user = MockUser {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            email: data.email.clone(),
            password: data.password.clone(),
            username: data.username.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            created_at: now_iso8601(),
        };
        let profile = new_user.profile();
        users.push(new_user);
        drop(users);

        let token = generate_token();
        self.record_session(&token, &profile.id);
        Ok(AuthResponse { user: profile, token })
    }

    /// Simulated logout. Performs no storage mutation; clearing the held
    /// token and user is the session store's job.
    pub async fn logout(&self) {
        delay_ms(LOGOUT_DELAY_MS).await;
    }

    /// Resolve a token issued by an earlier login/registration.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, AuthError> {
        let user_id = {
            let sessions = self.sessions.lock().expect("mock session table lock");
            sessions.get(token).cloned()
        };
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        let users = self.users.lock().expect("mock user list lock");
        Ok(users.iter().find(|u| u.id == user_id).map(MockUser::profile))
    }

    fn record_session(&self, token: &str, user_id: &str) {
        let mut sessions = self.sessions.lock().expect("mock session table lock");
        sessions.insert(token.to_owned(), user_id.to_owned());
    }
}

/// Opaque token: millisecond timestamp plus a short random suffix.
/// Uniqueness is best-effort; this is not a real bearer credential.
fn generate_token() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "mock-jwt-token-{}-{}",
        Utc::now().timestamp_millis(),
        &suffix[..7]
    )
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Simulated API latency. Real waiting only happens in the browser; on the
/// host (SSR, tests) it resolves immediately.
async fn delay_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
