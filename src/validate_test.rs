use super::*;

fn login_data(email: &str, password: &str) -> LoginData {
    LoginData {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

fn register_data() -> RegisterData {
    RegisterData {
        email: "new@example.com".to_owned(),
        username: "newuser".to_owned(),
        password: "secret123".to_owned(),
        first_name: Some("New".to_owned()),
        last_name: Some("User".to_owned()),
    }
}

// =============================================================
// Login validation
// =============================================================

#[test]
fn login_valid_credentials_pass() {
    let errors = validate_login(&login_data("a@b.co", "pw"));
    assert!(errors.is_empty());
}

#[test]
fn login_missing_email_flags_only_email() {
    let errors = validate_login(&login_data("", "pw"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message("email").as_deref(), Some("Email is required"));
}

#[test]
fn login_missing_password_flags_only_password() {
    let errors = validate_login(&login_data("a@b.co", ""));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message("password").as_deref(),
        Some("Password is required")
    );
}

#[test]
fn login_malformed_email_flagged() {
    for bad in ["plain", "no-at.com", "a@b", "a@.co", "@b.co", "a b@c.co"] {
        let errors = validate_login(&login_data(bad, "pw"));
        assert!(errors.message("email").is_some(), "accepted: {bad}");
    }
}

#[test]
fn login_password_has_no_length_rule() {
    let errors = validate_login(&login_data("a@b.co", "x"));
    assert!(errors.is_empty());
}

// =============================================================
// Registration validation
// =============================================================

#[test]
fn register_valid_input_passes() {
    let data = register_data();
    let errors = validate_register(&data, "secret123");
    assert!(errors.is_empty());
}

#[test]
fn register_missing_required_fields_flag_each_field() {
    let empty = RegisterData::default();
    let errors = validate_register(&empty, "");
    for field in ["first_name", "last_name", "email", "username", "password"] {
        assert!(errors.message(field).is_some(), "no error for {field}");
    }
    // Both passwords empty: they match, so no confirm error.
    assert!(errors.message("confirm_password").is_none());
}

#[test]
fn register_short_username_flagged() {
    let mut data = register_data();
    data.username = "ab".to_owned();
    let errors = validate_register(&data, "secret123");
    assert_eq!(
        errors.message("username").as_deref(),
        Some("Must be at least 3 characters")
    );
}

#[test]
fn register_short_password_flagged() {
    let mut data = register_data();
    data.password = "12345".to_owned();
    let errors = validate_register(&data, "12345");
    assert_eq!(
        errors.message("password").as_deref(),
        Some("Must be at least 6 characters")
    );
}

#[test]
fn register_confirm_mismatch_flagged() {
    let data = register_data();
    let errors = validate_register(&data, "different");
    assert_eq!(
        errors.message("confirm_password").as_deref(),
        Some("Passwords do not match")
    );
}

#[test]
fn register_names_may_not_be_blank_options() {
    let mut data = register_data();
    data.first_name = None;
    data.last_name = Some(String::new());
    let errors = validate_register(&data, "secret123");
    assert!(errors.message("first_name").is_some());
    assert!(errors.message("last_name").is_some());
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_clear_removes_single_field() {
    let mut errors = validate_login(&login_data("", ""));
    assert_eq!(errors.len(), 2);
    errors.clear("email");
    assert!(errors.message("email").is_none());
    assert!(errors.message("password").is_some());
}

#[test]
fn field_errors_clear_unknown_field_is_noop() {
    let mut errors = FieldErrors::default();
    errors.clear("email");
    assert!(errors.is_empty());
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_local_at_domain_tld() {
    assert!(looks_like_email("user@example.com"));
    assert!(looks_like_email("a.b+c@sub.domain.co"));
}

#[test]
fn email_shape_rejects_double_at_and_whitespace() {
    assert!(!looks_like_email("a@@b.co"));
    assert!(!looks_like_email("a@b@c.co"));
    assert!(!looks_like_email(" a@b.co"));
}
