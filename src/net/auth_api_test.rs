use futures::executor::block_on;

use super::*;
use crate::net::config::AuthBackend;

fn lock() -> std::sync::MutexGuard<'static, ()> {
    token::TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[test]
fn from_config_selects_http_backend() {
    let service = AuthService::from_config(&ApiConfig::default());
    assert!(matches!(service, AuthService::Http(_)));
}

#[test]
fn from_config_selects_mock_backend() {
    let config = ApiConfig {
        backend: AuthBackend::Mock,
        ..ApiConfig::default()
    };
    let service = AuthService::from_config(&config);
    assert!(matches!(service, AuthService::Mock(_)));
}

#[test]
fn http_calls_are_unavailable_off_browser() {
    let http = HttpAuthService::new(crate::net::config::DEFAULT_API_URL);
    let err = block_on(http.login(&LoginData {
        email: "a@b.co".to_owned(),
        password: "pw".to_owned(),
    }))
    .unwrap_err();
    assert_eq!(err, AuthError::Unavailable);

    let err = block_on(http.current_user("tok")).unwrap_err();
    assert_eq!(err, AuthError::Unavailable);
}

#[test]
fn is_authenticated_tracks_the_stored_token() {
    let _guard = lock();
    token::clear_token();

    let service = AuthService::from_config(&ApiConfig::default());
    assert!(!service.is_authenticated());
    assert!(service.token().is_none());

    token::store_token("tok-123");
    assert!(service.is_authenticated());
    assert_eq!(service.token().as_deref(), Some("tok-123"));

    token::clear_token();
    assert!(!service.is_authenticated());
}

#[test]
fn http_logout_clears_the_stored_token_without_a_network_call() {
    let _guard = lock();
    token::store_token("tok-456");

    let http = HttpAuthService::new(crate::net::config::DEFAULT_API_URL);
    block_on(http.logout());
    assert!(token::stored_token().is_none());
}

#[test]
fn current_user_without_a_token_is_anonymous() {
    let _guard = lock();
    token::clear_token();

    // No token: resolves to no user without touching the transport.
    let service = AuthService::from_config(&ApiConfig::default());
    let user = block_on(service.current_user()).unwrap();
    assert!(user.is_none());
}
