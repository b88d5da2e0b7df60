//! GitHub client implementation

use reqwest::{Method, RequestBuilder};

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Value sent in the `X-GitHub-Api-Version` header
pub const API_VERSION: &str = "2022-11-28";

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("ghcreate/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making authenticated requests
///
/// Every request carries the bearer token, the versioned API header and a
/// User-Agent, which GitHub rejects requests without.
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: String,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_API_BASE)
    }

    /// Create a client against a custom API root (GitHub Enterprise, test servers)
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a non-empty token is configured
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "github request");
        self.client
            .request(method, url)
            .header("Accept", ACCEPT)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
    }
}
