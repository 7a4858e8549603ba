//! Access/refresh token persistence.
//!
//! Tokens live under their own storage keys, outside the reactive session
//! state. Nothing here inspects token shape or expiry.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use crate::storage::KeyValueStore;
use crate::types::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored access token. Empty entries count as absent.
    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// True when at least one token is stored.
    pub fn has_any(&self) -> bool {
        self.access_token().is_some() || self.refresh_token().is_some()
    }

    pub fn set_tokens(&self, tokens: &TokenPair) {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
    }

    pub fn clear_tokens(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|token| !token.is_empty())
    }
}
