use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::body::{Bytes, to_bytes};
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::get;

use super::*;
use crate::config::{ProxyTimeouts, ServerConfig};
use crate::routes::api_routes;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_path_and_query() {
    let url = upstream_url("http://backend:8000", "/api/v1/projects", Some("limit=12&page=1")).unwrap();
    assert_eq!(url, "http://backend:8000/api/v1/projects?limit=12&page=1");
}

#[test]
fn upstream_url_skips_empty_query() {
    let url = upstream_url("http://backend:8000", "/api/v1/stats/", Some("")).unwrap();
    assert_eq!(url, "http://backend:8000/api/v1/stats/");
    let url = upstream_url("http://backend:8000", "/api/v1/stats/", None).unwrap();
    assert_eq!(url, "http://backend:8000/api/v1/stats/");
}

#[test]
fn upstream_url_keeps_base_path_prefix_and_encoding() {
    let url = upstream_url("https://example.test/backend", "/api/v1/projects/biogas%20unit", None).unwrap();
    assert_eq!(url, "https://example.test/backend/api/v1/projects/biogas%20unit");
}

#[test]
fn upstream_url_rejects_paths_outside_prefix() {
    for path in ["/admin", "/api/v2/projects", "/api/v1projects"] {
        assert!(matches!(upstream_url("http://b", path, None), Err(ProxyError::BadPath(_))), "{path}");
    }
}

#[test]
fn upstream_url_rejects_dot_segments() {
    for path in ["/api/v1/../admin", "/api/v1/./projects", "/api/v1/%2e%2e/secret", "/api/v1/%2E./x"] {
        assert!(matches!(upstream_url("http://b", path, None), Err(ProxyError::BadPath(_))), "{path}");
    }
}

#[test]
fn upstream_url_allows_dots_inside_segments() {
    let url = upstream_url("http://b", "/api/v1/projects/phase.2", None).unwrap();
    assert_eq!(url, "http://b/api/v1/projects/phase.2");
}

// =============================================================================
// filter_headers
// =============================================================================

#[test]
fn filter_headers_drops_hop_by_hop_and_host() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(HeaderName::from_static("keep-alive"), HeaderValue::from_static("timeout=5"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = filter_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn filter_headers_drops_names_listed_in_connection() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("close, X-Session-Hint"));
    headers.insert(HeaderName::from_static("x-session-hint"), HeaderValue::from_static("1"));
    headers.insert(HeaderName::from_static("x-request-id"), HeaderValue::from_static("r-1"));

    let out = filter_headers(&headers);
    assert!(out.get("x-session-hint").is_none());
    assert_eq!(out.get("x-request-id").unwrap(), "r-1");
}

#[test]
fn filter_headers_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    let out = filter_headers(&headers);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

#[test]
fn hop_by_hop_list_is_exact() {
    assert!(is_hop_by_hop(&header::UPGRADE));
    assert!(is_hop_by_hop(&header::PROXY_AUTHORIZATION));
    assert!(!is_hop_by_hop(&header::AUTHORIZATION));
    assert!(!is_hop_by_hop(&header::ACCEPT));
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::BadPath("/x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::Body("eof".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::TooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn proxy_error_body_uses_detail_shape() {
    let response = ProxyError::Timeout.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["detail"], "backend timed out");
}

// =============================================================================
// end to end against a local upstream
// =============================================================================

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn config_for(base: String, request_secs: u64) -> ServerConfig {
    ServerConfig { port: 0, api_base_url: base, timeouts: ProxyTimeouts { request_secs, connect_secs: 2 } }
}

async fn proxy_for(base: String, request_secs: u64) -> SocketAddr {
    let state = AppState::new(config_for(base, request_secs)).unwrap();
    serve(api_routes(state)).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or("").to_owned();
    (
        StatusCode::CREATED,
        [(HeaderName::from_static("x-upstream"), HeaderValue::from_static("brisk-backend"))],
        Json(serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "auth": auth,
            "body": String::from_utf8_lossy(&body),
        })),
    )
}

#[tokio::test]
async fn forwards_method_path_query_body_and_auth() {
    let upstream = serve(Router::new().fallback(echo)).await;
    let proxy = proxy_for(format!("http://{upstream}"), 5).await;

    let response = reqwest::Client::new()
        .post(format!("http://{proxy}/api/v1/donations?campaign=biogas-for-schools"))
        .header("authorization", "Bearer t0ken")
        .header("content-type", "application/json")
        .body(r#"{"amount":50000}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    assert_eq!(response.headers().get("x-upstream").unwrap(), "brisk-backend");
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["method"], "POST");
    assert_eq!(json["uri"], "/api/v1/donations?campaign=biogas-for-schools");
    assert_eq!(json["auth"], "Bearer t0ken");
    assert_eq!(json["body"], r#"{"amount":50000}"#);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let state = AppState::new(config_for("http://127.0.0.1:9".to_owned(), 1)).unwrap();
    let req = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/v1/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(vec![b'x'; MAX_BODY_BYTES + 1]))
        .unwrap();

    let err = forward(State(state), req).await.unwrap_err();
    assert!(matches!(err, ProxyError::TooLarge));
    assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn bodies_above_axum_default_limit_still_forward() {
    let upstream = serve(Router::new().fallback(|body: Bytes| async move { body.len().to_string() })).await;
    let proxy = proxy_for(format!("http://{upstream}"), 5).await;

    // axum's own default cap is 2 MiB.
    let size = 3 * 1024 * 1024;
    let response = reqwest::Client::new()
        .post(format!("http://{proxy}/api/v1/projects/upload"))
        .body(vec![b'x'; size])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), size.to_string());
}

#[tokio::test]
async fn relays_upstream_error_status_unchanged() {
    let upstream = serve(Router::new().route(
        "/api/v1/projects/{slug}",
        get(|| async { (StatusCode::NOT_FOUND, Json(serde_json::json!({ "detail": "Project not found" }))) }),
    ))
    .await;
    let proxy = proxy_for(format!("http://{upstream}"), 5).await;

    let response = reqwest::get(format!("http://{proxy}/api/v1/projects/missing")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["detail"], "Project not found");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let proxy = proxy_for(format!("http://{closed}"), 5).await;

    let response = reqwest::get(format!("http://{proxy}/api/v1/services")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = response.json().await.unwrap();
    assert!(json["detail"].as_str().unwrap().starts_with("backend unreachable"));
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let upstream = serve(Router::new().route(
        "/api/v1/stats/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            StatusCode::OK
        }),
    ))
    .await;
    let proxy = proxy_for(format!("http://{upstream}"), 1).await;

    let response = reqwest::get(format!("http://{proxy}/api/v1/stats/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = proxy_for("http://127.0.0.1:9".to_owned(), 1).await;
    let response = reqwest::get(format!("http://{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
