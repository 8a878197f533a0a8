use super::*;

#[test]
fn submit_state_defaults_to_idle() {
    assert_eq!(SubmitState::default(), SubmitState::Idle);
}

#[test]
fn idle_and_failed_accept_a_new_submission() {
    assert!(SubmitState::Idle.accepts_submit());
    assert!(SubmitState::Failed("nope".to_owned()).accepts_submit());
}

#[test]
fn pending_refuses_reentry() {
    assert!(!SubmitState::Pending.accepts_submit());
}

#[test]
fn error_text_only_present_in_failed_state() {
    assert_eq!(SubmitState::Idle.error(), None);
    assert_eq!(SubmitState::Pending.error(), None);
    assert_eq!(
        SubmitState::Failed("Invalid credentials".to_owned()).error(),
        Some("Invalid credentials")
    );
}

#[test]
fn validate_credentials_trims_both_fields() {
    assert_eq!(
        validate_credentials("  user@example.com  ", " hunter2 "),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("user@example.com", ""),
        Err("Enter both email and password.")
    );
}
