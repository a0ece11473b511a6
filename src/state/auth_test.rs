use futures::executor::block_on;

use super::*;
use crate::net::config::{ApiConfig, AuthBackend};
use crate::net::mock_auth::{
    FIXTURE_EMAIL, FIXTURE_PASSWORD, INVALID_CREDENTIALS, MockAuthService,
};

fn lock() -> std::sync::MutexGuard<'static, ()> {
    token::TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn mock_session() -> Session {
    let config = ApiConfig {
        backend: AuthBackend::Mock,
        ..ApiConfig::default()
    };
    Session::new(AuthService::from_config(&config))
}

fn fixture_login() -> LoginData {
    LoginData {
        email: FIXTURE_EMAIL.to_owned(),
        password: FIXTURE_PASSWORD.to_owned(),
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_sets_user_and_authenticated() {
    let session = mock_session();
    block_on(session.login(&fixture_login())).unwrap();

    assert!(session.is_authenticated());
    assert!(!session.is_loading());
    assert_eq!(session.user().map(|u| u.email), Some(FIXTURE_EMAIL.to_owned()));
}

#[test]
fn login_failure_propagates_and_leaves_session_anonymous() {
    let session = mock_session();
    let err = block_on(session.login(&LoginData {
        email: FIXTURE_EMAIL.to_owned(),
        password: "wrong".to_owned(),
    }))
    .unwrap_err();

    assert_eq!(err.message(), INVALID_CREDENTIALS);
    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_success_sets_user() {
    let session = mock_session();
    block_on(session.register(&RegisterData {
        email: "fresh@example.com".to_owned(),
        username: "fresh".to_owned(),
        password: "secret123".to_owned(),
        first_name: Some("Fresh".to_owned()),
        last_name: None,
    }))
    .unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.username), Some("fresh".to_owned()));
}

#[test]
fn register_duplicate_email_leaves_session_anonymous() {
    let session = mock_session();
    let err = block_on(session.register(&RegisterData {
        email: FIXTURE_EMAIL.to_owned(),
        username: "whoever".to_owned(),
        password: "secret123".to_owned(),
        first_name: None,
        last_name: None,
    }))
    .unwrap_err();

    assert!(matches!(err, AuthError::Rejected(_)));
    assert!(!session.is_authenticated());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_user_and_persisted_token() {
    let _guard = lock();
    token::store_token("leftover-token");

    let session = mock_session();
    block_on(session.login(&fixture_login())).unwrap();
    assert!(session.is_authenticated());

    block_on(session.logout());
    assert!(!session.is_authenticated());
    assert!(token::stored_token().is_none());
}

// =============================================================
// Startup session check
// =============================================================

#[test]
fn init_without_token_ends_loading_anonymous() {
    let _guard = lock();
    token::clear_token();

    let session = mock_session();
    assert!(session.is_loading());
    block_on(session.init());

    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
}

#[test]
fn init_resolves_stored_token_to_its_user() {
    let _guard = lock();
    token::clear_token();

    // A token issued by the transport earlier in this "browser session".
    let service = AuthService::Mock(MockAuthService::new());
    let resp = block_on(service.login(&fixture_login())).unwrap();
    token::store_token(&resp.token);

    let session = Session::new(service);
    block_on(session.init());

    assert!(!session.is_loading());
    assert_eq!(session.user().map(|u| u.email), Some(FIXTURE_EMAIL.to_owned()));

    token::clear_token();
}

#[test]
fn init_with_unresolvable_token_stays_anonymous() {
    let _guard = lock();
    token::store_token("mock-jwt-token-0-stale");

    let session = mock_session();
    block_on(session.init());

    assert!(!session.is_loading());
    assert!(!session.is_authenticated());

    token::clear_token();
}
