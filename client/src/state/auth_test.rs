use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_not_logged_in() {
    let state = AuthState::default();
    assert!(!state.is_logged_in());
    assert!(!state.loading);
}

#[test]
fn auth_state_empty_token_is_not_logged_in() {
    let state = AuthState { token: Some(String::new()), ..AuthState::default() };
    assert!(!state.is_logged_in());
}

#[test]
fn auth_state_with_token_is_logged_in() {
    let state = AuthState { token: Some("jwt".to_owned()), ..AuthState::default() };
    assert!(state.is_logged_in());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_empty_outside_the_browser() {
    assert_eq!(stored_token(), None);
    assert_eq!(admin_email(), None);
    assert!(!is_logged_in());
    assert_eq!(AuthState::from_storage(), AuthState::default());
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_form_body_encodes_username_and_password() {
    assert_eq!(
        login_form_body(" admin@brisk.ug ", "p@ss word&1"),
        "username=admin%40brisk.ug&password=p%40ss+word%261"
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("a@b.com", "secret"), Ok(()));
    assert_eq!(validate_login_input("  ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}
