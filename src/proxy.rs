//! `/api/*` pass-through to the nutrition API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls same-origin `/api/...`; this handler replays the
//! request against `API_UPSTREAM_URL` with the `/api` prefix stripped and
//! streams back status, content type and body. Auth stays end-to-end: the
//! bearer header is forwarded untouched and never inspected here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::config::ServerConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const API_PREFIX: &str = "/api";

/// Request headers copied to the upstream call.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API upstream not configured")]
    NotConfigured,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Shared proxy state: one pooled client for every forwarded call.
#[derive(Clone, Debug)]
pub struct ApiProxy {
    http: reqwest::Client,
    upstream: Option<String>,
}

impl ApiProxy {
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: config.api_upstream.clone() })
    }

    pub fn is_configured(&self) -> bool {
        self.upstream.is_some()
    }
}

/// Map a local `/api/...` URI onto the upstream base URL.
fn upstream_url(base: &str, uri: &Uri) -> String {
    let path = uri.path();
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let rest = if rest.is_empty() { "/" } else { rest };
    match uri.query() {
        Some(query) => format!("{base}{rest}?{query}"),
        None => format!("{base}{rest}"),
    }
}

fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = incoming.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = proxy.upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, &uri);

    let mut request = proxy.http.request(method.clone(), &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }
    let response = request.send().await.map_err(|e| {
        tracing::warn!(%method, path = uri.path(), error = %e, "upstream request failed");
        ProxyError::Upstream(e.to_string())
    })?;

    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = response.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    tracing::debug!(%method, path = uri.path(), %status, "proxied");

    let mut out = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        out.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(out)
}
