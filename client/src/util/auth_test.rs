use super::*;

#[test]
fn should_redirect_when_loaded_without_token() {
    let state = AuthState { token: None, admin_email: None, loading: false };
    assert!(should_redirect_to_login(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { token: None, admin_email: None, loading: true };
    assert!(!should_redirect_to_login(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = AuthState { token: Some("jwt".to_owned()), admin_email: Some("a@b.com".to_owned()), loading: false };
    assert!(!should_redirect_to_login(&state));
}
