//! Client configuration.
//!
//! The page is served by the same origin as the auth service, so the
//! defaults need no overrides. Embedders pointing the client elsewhere use
//! the `with_*` builders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the raw token.
pub const DEFAULT_TOKEN_KEY: &str = "jwtToken";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every request path. Empty means same-origin.
    pub base_url: String,
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: String::new(), token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }

    /// Resolve an endpoint path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
