use super::*;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "test@example.com".to_owned(),
        username: "testuser".to_owned(),
        first_name: Some("Test".to_owned()),
        last_name: Some("User".to_owned()),
        created_at: "2026-08-29T12:00:00.000Z".to_owned(),
    }
}

#[test]
fn user_serializes_camel_case() {
    let value = serde_json::to_value(user()).unwrap();
    assert_eq!(value["firstName"], "Test");
    assert_eq!(value["lastName"], "User");
    assert_eq!(value["createdAt"], "2026-08-29T12:00:00.000Z");
}

#[test]
fn user_omits_absent_names() {
    let mut u = user();
    u.first_name = None;
    u.last_name = None;
    let value = serde_json::to_value(u).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("firstName"));
    assert!(!obj.contains_key("lastName"));
}

#[test]
fn user_deserializes_without_names() {
    let u: User = serde_json::from_str(
        r#"{"id":"u-2","email":"a@b.co","username":"ab","createdAt":"2026-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(u.first_name.is_none());
    assert!(u.last_name.is_none());
}

#[test]
fn register_data_never_carries_a_confirm_field() {
    let data = RegisterData {
        email: "a@b.co".to_owned(),
        username: "abc".to_owned(),
        password: "secret123".to_owned(),
        first_name: None,
        last_name: None,
    };
    let value = serde_json::to_value(data).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(
        obj.keys().collect::<Vec<_>>(),
        ["email", "password", "username"]
    );
}

#[test]
fn auth_response_deserializes() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"user":{"id":"1","email":"test@example.com","username":"testuser","createdAt":"2026-01-01T00:00:00Z"},"token":"tok"}"#,
    )
    .unwrap();
    assert_eq!(resp.token, "tok");
    assert_eq!(resp.user.email, "test@example.com");
}

#[test]
fn api_error_message_defaults_to_empty() {
    let err: ApiError = serde_json::from_str("{}").unwrap();
    assert!(err.message.is_empty());

    let err: ApiError = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
    assert_eq!(err.message, "nope");
}
