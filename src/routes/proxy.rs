//! Same-origin reverse proxy for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls relative `/api/v1/...` paths. Each request is replayed
//! against `BRISK_API_BASE_URL` with the same method, path, query, body and
//! end-to-end headers (including `Authorization`). Upstream statuses pass
//! through unchanged; only transport failures become proxy errors.

use axum::body::{Body, Bytes};
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";
/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid API path: {0}")]
    BadPath(String),

    #[error("could not read request body: {0}")]
    Body(String),

    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,

    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out")]
    Timeout,
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadPath(_) | Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn from_body(rejection: &BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge
        } else {
            Self::Body(rejection.body_text())
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }
}

/// Errors use the backend's `{"detail": "..."}` shape so the client shows
/// them the same way it shows backend errors.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Join the backend base with the incoming `/api/v1/...` path and query.
///
/// # Errors
///
/// Rejects paths outside the API prefix and paths containing `.`/`..`
/// segments (plain or percent-encoded).
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let rest = path.strip_prefix(API_PREFIX).ok_or_else(|| ProxyError::BadPath(path.to_owned()))?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        return Err(ProxyError::BadPath(path.to_owned()));
    }
    if rest.split('/').any(is_dot_segment) {
        return Err(ProxyError::BadPath(path.to_owned()));
    }
    let mut url = format!("{base}{path}");
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Ok(url)
}

/// Headers that describe a single connection and must not be forwarded.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Copy end-to-end headers only: drops hop-by-hop headers, anything the
/// `Connection` header names, and `Host`/`Content-Length` (recomputed).
pub fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let dropped = is_hop_by_hop(name)
            || listed.contains(name)
            || name == header::HOST
            || name == header::CONTENT_LENGTH;
        if !dropped {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Forward one request to the backend and relay its response.
///
/// # Errors
///
/// Returns a [`ProxyError`] for bad paths, unreadable or oversized bodies,
/// and transport failures. Upstream HTTP errors are relayed as responses.
/// The body limit is the router's `DefaultBodyLimit`.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_base_url, req.uri().path(), req.uri().query())?;
    let method = req.method().clone();
    let headers = filter_headers(req.headers());
    let body = Bytes::from_request(req, &()).await.map_err(|e| ProxyError::from_body(&e))?;

    tracing::debug!(%method, %url, "proxying request");
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            ProxyError::from_reqwest(&e)
        })?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "upstream body read failed");
        ProxyError::from_reqwest(&e)
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
