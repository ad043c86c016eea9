//! Shared admin route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin page except login applies the same redirect so an expired or
//! missing token always lands on `/admin/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use std::future::Future;

use crate::net::api::ApiError;
use crate::state::auth::{self, AuthState, LOGIN_ROUTE};
use crate::util::load::{Remote, load_into};

/// Whether an admin page should bounce to the login route.
pub fn should_redirect_to_login(state: &AuthState) -> bool {
    !state.loading && !state.is_logged_in()
}

/// Redirect to `/admin/login` whenever auth has loaded and no token is present.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Drop the session when the backend rejects the token.
pub fn handle_auth_error(auth_state: RwSignal<AuthState>, err: &ApiError) {
    if err.is_unauthorized() {
        auth::logout();
        auth_state.set(AuthState::default());
    }
}

/// `load_into` for admin data: a rejected token ends the session.
pub fn load_guarded<T, F>(auth_state: RwSignal<AuthState>, target: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    load_into(target, async move {
        let result = fetch.await;
        if let Err(err) = &result {
            handle_auth_error(auth_state, err);
        }
        result
    });
}
