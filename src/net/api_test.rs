use super::*;

#[test]
fn login_payload_contains_email_and_password() {
    assert_eq!(
        login_payload("user@example.com", "hunter2"),
        serde_json::json!({ "email": "user@example.com", "password": "hunter2" })
    );
}

#[test]
fn interpret_response_success_returns_token() {
    let body = LoginResponse {
        success: true,
        token: Some("T".to_owned()),
        message: None,
    };
    assert_eq!(interpret_response(body), Ok("T".to_owned()));
}

#[test]
fn interpret_response_success_without_token_is_transport() {
    let body = LoginResponse {
        success: true,
        token: None,
        message: None,
    };
    assert_eq!(interpret_response(body), Err(LoginError::Transport));
}

#[test]
fn interpret_response_failure_surfaces_server_message() {
    let body = LoginResponse {
        success: false,
        token: None,
        message: Some("Invalid credentials".to_owned()),
    };
    let err = interpret_response(body).unwrap_err();
    assert_eq!(err, LoginError::Rejected("Invalid credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn interpret_response_failure_without_message_is_transport() {
    let body = LoginResponse {
        success: false,
        token: None,
        message: None,
    };
    assert_eq!(interpret_response(body), Err(LoginError::Transport));
}

#[test]
fn transport_error_displays_fixed_generic_message() {
    assert_eq!(LoginError::Transport.to_string(), TRANSPORT_ERROR_MESSAGE);
}

#[test]
fn login_response_decodes_with_optional_fields_missing() {
    let body: LoginResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(body.success);
    assert_eq!(body.token, None);
    assert_eq!(body.message, None);
}

#[test]
fn login_response_decodes_full_rejection_body() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
    assert!(!body.success);
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}
