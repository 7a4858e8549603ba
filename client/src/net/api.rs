//! REST client for the nutrition API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! access token sent as a bearer header.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `ApiError::Network`, non-2xx responses to
//! `ApiError::Status` carrying the response text, and body mismatches to
//! `ApiError::Decode`. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use session::subscription::SubscriptionStatus;
use session::tokens::TokenStore;
use session::types::{Credentials, Profile, ProfileCreate, ProfileSummary, Registration, TokenPair, User, UserUpdate};
use session::{ApiError, NutritionApi};

use crate::util::storage::BrowserStore;

/// API root; override at build time with `NOURISH_API_BASE`.
pub const API_BASE: &str = match option_env!("NOURISH_API_BASE") {
    Some(base) => base,
    None => "/api",
};

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").or_else(|| v.get("message")).and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned());
    ApiError::Status { status, message }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
}

/// HTTP implementation of [`NutritionApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: &'static str,
    tokens: TokenStore<BrowserStore>,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpApi {
    pub fn new() -> Self {
        Self { base: API_BASE, tokens: TokenStore::new(BrowserStore) }
    }

    /// Send a request and return the raw response text.
    async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        let url = endpoint(self.base, path);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
            };
            if let Some(token) = self.tokens.access_token() {
                builder = builder.header("Authorization", &bearer(&token));
            }
            let request = match body {
                Some(payload) => builder.json(&payload),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                log::debug!("{method:?} {url} -> {}", resp.status());
                return Err(status_error(resp.status(), &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, url, body, &self.tokens);
            Err(ApiError::Unavailable)
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn payload<B: Serialize>(body: &B) -> Result<Option<serde_json::Value>, ApiError> {
        serde_json::to_value(body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl NutritionApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.request(Method::Post, "auth/login", Self::payload(credentials)?).await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.send(Method::Post, "auth/register", Self::payload(registration)?)
            .await
            .map(|_| ())
    }

    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        self.send(Method::Post, "auth/logout", Some(body)).await.map(|_| ())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.request(Method::Get, "users/me", None).await
    }

    async fn update_current_user(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.request(Method::Patch, "users/me", Self::payload(update)?).await
    }

    async fn profile_summary(&self) -> Result<ProfileSummary, ApiError> {
        self.request(Method::Get, "profiles/me/summary", None).await
    }

    async fn profile(&self) -> Result<Profile, ApiError> {
        self.request(Method::Get, "profiles/me", None).await
    }

    async fn create_profile(&self, profile: &ProfileCreate) -> Result<Profile, ApiError> {
        self.request(Method::Post, "profiles", Self::payload(profile)?).await
    }

    async fn update_profile(&self, profile: &ProfileCreate) -> Result<Profile, ApiError> {
        self.request(Method::Put, "profiles/me", Self::payload(profile)?).await
    }

    async fn subscription_status(&self) -> Result<SubscriptionStatus, ApiError> {
        self.request(Method::Get, "subscriptions/status", None).await
    }
}
