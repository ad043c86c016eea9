//! Generic REST client for the `/api/v1` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always same-origin;
//! the host process forwards `/api/v1/*` to the backend.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since data
//! is only fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`ApiError`], whose `Display` output is the
//! plain text pages show to the visitor. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

pub const API_PREFIX: &str = "/api/v1";

const FALLBACK_ERROR: &str = "Request failed";

/// Failure of a backend call, rendered verbatim in the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Request body with its content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Json(String),
    Form(String),
}

impl Body {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_string(body)
            .map(Self::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Join a backend-relative path onto [`API_PREFIX`].
pub fn endpoint(path: &str) -> String {
    if path.starts_with(API_PREFIX) {
        return path.to_owned();
    }
    format!("{API_PREFIX}/{}", path.trim_start_matches('/'))
}

/// `Authorization` header value for a stored token, if any.
pub fn bearer(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// Pull a user-facing message out of an error body.
///
/// The backend reports `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "..."}]}` for validation failures.
pub fn error_message(body: Option<&Value>) -> String {
    let detail = body.and_then(|b| b.get("detail"));
    match detail {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map_or_else(|| FALLBACK_ERROR.to_owned(), str::to_owned),
        _ => FALLBACK_ERROR.to_owned(),
    }
}

/// Interpret a finished response: status code and raw body text.
///
/// Empty bodies (including 204) yield `Ok(None)`.
pub fn parse_response(status: u16, text: &str) -> Result<Option<Value>, ApiError> {
    let parsed = if text.trim().is_empty() {
        None
    } else {
        serde_json::from_str::<Value>(text).ok()
    };

    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message: error_message(parsed.as_ref()) });
    }
    if status == 204 || text.trim().is_empty() {
        return Ok(None);
    }
    parsed
        .map(Some)
        .ok_or_else(|| ApiError::Decode("response body is not JSON".to_owned()))
}

/// Decode an optional JSON body into `T`; a missing body decodes as `null`.
pub fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<T, ApiError> {
    serde_json::from_value(body.unwrap_or(Value::Null)).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one request and return the parsed JSON body, if any.
///
/// Attaches `Authorization: Bearer <token>` whenever a token is stored.
pub async fn send(method: Method, path: &str, body: Option<Body>) -> Result<Option<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        let token = crate::state::auth::stored_token();
        if let Some(value) = bearer(token.as_deref()) {
            builder = builder.header("Authorization", &value);
        }

        let request = match body {
            Some(body) => {
                let content_type = body.content_type();
                let (Body::Json(raw) | Body::Form(raw)) = body;
                builder.header("Content-Type", content_type).body(raw)
            }
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let result = parse_response(status, &text);
        if let Err(err) = &result {
            leptos::logging::warn!("api {method:?} {url} failed: {err}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// `GET` a JSON resource.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send(Method::Get, path, None).await?)
}

/// `POST` a JSON body and decode the response.
pub async fn post<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send(Method::Post, path, Some(Body::json(body)?)).await?)
}

/// `PUT` a JSON body and decode the response.
pub async fn put<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send(Method::Put, path, Some(Body::json(body)?)).await?)
}

/// `PATCH` a JSON body and decode the response.
pub async fn patch<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send(Method::Patch, path, Some(Body::json(body)?)).await?)
}

/// `DELETE` a resource, ignoring any response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    decode::<IgnoredAny>(send(Method::Delete, path, None).await?).map(|_| ())
}
