//! Admin authentication backed by browser `localStorage`.
//!
//! The backend issues a bearer token from `/api/v1/auth/login`; we keep it
//! under `access_token` together with the signed-in email. SSR paths read
//! nothing and write nothing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use url::form_urlencoded;

use crate::net::api::{self, ApiError, Body, Method};
use crate::net::types::Token;

pub const TOKEN_KEY: &str = "access_token";
pub const ADMIN_EMAIL_KEY: &str = "admin_email";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGIN_ROUTE: &str = "/admin/login";
pub const DASHBOARD_ROUTE: &str = "/admin/dashboard";

/// Signed-in admin as known to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub admin_email: Option<String>,
    /// `true` until storage has been read after hydration.
    pub loading: bool,
}

impl AuthState {
    /// Snapshot of what is currently persisted.
    pub fn from_storage() -> Self {
        Self { token: stored_token(), admin_email: admin_email(), loading: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// `username=<email>&password=<password>` as the OAuth2 password form expects.
pub fn login_form_body(email: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", email.trim())
        .append_pair("password", password)
        .finish()
}

/// Validate the login inputs before hitting the network.
pub fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(())
}

/// Exchange credentials for a token and persist it.
///
/// # Errors
///
/// Returns the backend's error (e.g. bad credentials) or a decode error when
/// the response carries no `access_token`.
pub async fn login(email: &str, password: &str) -> Result<AuthState, ApiError> {
    let body = Body::Form(login_form_body(email, password));
    let token: Token = api::decode(api::send(Method::Post, LOGIN_PATH, Some(body)).await?)?;
    if token.access_token.is_empty() {
        return Err(ApiError::Decode("login response has no access token".to_owned()));
    }
    storage_set(TOKEN_KEY, &token.access_token);
    let email = email.trim();
    if !email.is_empty() {
        storage_set(ADMIN_EMAIL_KEY, email);
    }
    Ok(AuthState { token: Some(token.access_token), admin_email: Some(email.to_owned()), loading: false })
}

/// Forget the token and email, then send the browser to the login page.
pub fn logout() {
    storage_remove(TOKEN_KEY);
    storage_remove(ADMIN_EMAIL_KEY);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_ROUTE);
        }
    }
}

/// Token currently in storage, if any.
pub fn stored_token() -> Option<String> {
    storage_get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn admin_email() -> Option<String> {
    storage_get(ADMIN_EMAIL_KEY).filter(|e| !e.is_empty())
}

pub fn is_logged_in() -> bool {
    stored_token().is_some()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn storage_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn storage_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn storage_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
