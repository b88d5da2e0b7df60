//! Identity operations against the `/user` endpoint

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::util::error_from_response;
use reqwest::Method;
use serde_json::Value;

impl GitHubClient {
    /// Check whether the configured token is accepted by GitHub
    ///
    /// # Returns
    /// `Ok(true)` only when the identity request succeeds. Any other HTTP
    /// status yields `Ok(false)`; an empty token yields `Ok(false)` without
    /// a request.
    ///
    /// # Errors
    /// [`GitHubError::Transport`] when the server could not be reached
    pub async fn validate_token(&self) -> crate::Result<bool> {
        if !self.has_token() {
            return Ok(false);
        }

        let response = self.request(Method::GET, "/user").send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "token validation response");
        Ok(status.is_success())
    }

    /// Get the login of the account the token belongs to
    ///
    /// # Errors
    /// - [`GitHubError::Auth`] / [`GitHubError::Api`] on a non-success status
    /// - [`GitHubError::Decode`] if the body has no `login` field
    pub async fn get_username(&self) -> crate::Result<String> {
        let response = self.request(Method::GET, "/user").send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))?;

        body.get("login")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| GitHubError::Decode("missing field `login`".to_string()))
    }
}
