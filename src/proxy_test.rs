use axum::http::HeaderValue;

use super::*;

fn uri(raw: &str) -> Uri {
    raw.parse().unwrap()
}

#[test]
fn upstream_url_strips_api_prefix() {
    assert_eq!(upstream_url("https://up.test", &uri("/api/users/me")), "https://up.test/users/me");
}

#[test]
fn upstream_url_keeps_query_string() {
    assert_eq!(
        upstream_url("https://up.test/v1", &uri("/api/profiles/me/summary?fresh=1")),
        "https://up.test/v1/profiles/me/summary?fresh=1"
    );
}

#[test]
fn upstream_url_maps_bare_prefix_to_root() {
    assert_eq!(upstream_url("https://up.test", &uri("/api")), "https://up.test/");
}

#[test]
fn forwarded_headers_keep_only_allowed_names() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer tok");
    assert!(out.get(header::COOKIE).is_none());
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::NotConfigured.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::Upstream("reset".into()).into_response().status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn proxy_without_upstream_is_not_configured() {
    let cfg = ServerConfig { port: 3000, api_upstream: None, api_timeout_secs: 30 };
    assert!(!ApiProxy::new(&cfg).unwrap().is_configured());
}

#[tokio::test]
async fn forward_without_upstream_answers_503() {
    let cfg = ServerConfig { port: 3000, api_upstream: None, api_timeout_secs: 30 };
    let proxy = ApiProxy::new(&cfg).unwrap();
    let result = forward(State(proxy), Method::GET, uri("/api/users/me"), HeaderMap::new(), Bytes::new()).await;
    assert!(matches!(result, Err(ProxyError::NotConfigured)));
}
