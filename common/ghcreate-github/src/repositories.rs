//! Repository creation

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::util::error_from_response;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload for `POST /user/repos`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RepositoryRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub auto_init: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
}

impl RepositoryRequest {
    /// A public, uninitialised repository with an empty description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            private: false,
            auto_init: false,
            gitignore_template: None,
            license_template: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    pub fn with_gitignore_template(mut self, template: impl Into<String>) -> Self {
        self.gitignore_template = Some(template.into());
        self
    }

    pub fn with_license_template(mut self, template: impl Into<String>) -> Self {
        self.license_template = Some(template.into());
        self
    }
}

/// Repository as returned by GitHub after creation
///
/// Only the URLs are interpreted; every other field is kept verbatim in
/// `extra`.
#[derive(Deserialize, Debug, Clone)]
pub struct RepositoryResource {
    pub name: String,
    pub html_url: String,
    pub clone_url: String,
    #[serde(default)]
    pub ssh_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GitHubClient {
    /// Create a repository owned by the authenticated user
    ///
    /// # Errors
    /// - [`GitHubError::Auth`] if the token is rejected
    /// - [`GitHubError::Api`] for any other non-2xx status, e.g. 422 when
    ///   the name is already taken
    /// - [`GitHubError::Transport`] if GitHub could not be reached
    /// - [`GitHubError::Decode`] if the response lacks the repository URLs
    pub async fn create_repository(
        &self,
        request: &RepositoryRequest,
    ) -> crate::Result<RepositoryResource> {
        let response = self
            .request(Method::POST, "/user/repos")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<RepositoryResource>()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))
    }
}
