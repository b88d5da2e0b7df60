//! Publish command implementation
//!
//! Runs the whole flow for one working copy, strictly in order:
//!
//! 1. Resolve and validate the token (one interactive retry)
//! 2. Check that the path is a working copy
//! 3. Determine the repository name
//! 4. Create the repository on GitHub
//! 5. Point the remote reference at it
//! 6. Push, unless disabled
//!
//! Option values are checked once the token is known to be good and the
//! path is a working copy, right before the name is settled.
//!
//! The first failure ends the run. A repository created in step 4 is not
//! deleted if a later step fails; its URL is reported instead and carried
//! in the returned error.

use super::{Command, CommandContext};
use crate::config::{PublishOptions, validation};
use crate::credentials::{CredentialResolver, TokenPrompt, TokenSource};
use crate::error::PublishError;
use crate::git::{self, Logger, RemoteAction};
use crate::utils::{directory_name, resolve_repo_path};
use crate::Result;
use async_trait::async_trait;
use ghcreate_github::{GitHubClient, RepositoryRequest, RepositoryResource};
use std::path::Path;

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub repository: RepositoryResource,
    /// Login of the token owner, when the lookup succeeded
    pub owner: Option<String>,
    pub remote_url: String,
    pub remote_action: RemoteAction,
    /// Branch pushed, `None` with `--no-push`
    pub pushed_branch: Option<String>,
}

pub struct PublishCommand {
    pub options: PublishOptions,
}

impl PublishCommand {
    pub fn new(options: PublishOptions) -> Self {
        Self { options }
    }

    fn client(&self, token: String) -> GitHubClient {
        GitHubClient::with_base_url(token, self.options.api_url.clone())
    }

    async fn authenticate(&self, logger: &Logger, prompt: &dyn TokenPrompt) -> Result<GitHubClient> {
        let resolver = CredentialResolver::new(self.options.token.clone())
            .with_env_var(self.options.token_env_var.clone());

        if let Some((token, source)) = resolver.initial_token() {
            let client = self.client(token);
            if client.validate_token().await? {
                tracing::debug!(?source, "token accepted");
                return Ok(client);
            }
            let origin = match source {
                TokenSource::Flag => "--token".to_string(),
                TokenSource::Environment => self.options.token_env_var.clone(),
                TokenSource::Prompt => "prompt".to_string(),
            };
            logger.warn(&format!("GitHub rejected the token from {}", origin));
        }

        let client = self.client(resolver.prompt(prompt)?);
        if client.validate_token().await? {
            tracing::debug!(source = ?TokenSource::Prompt, "token accepted");
            Ok(client)
        } else {
            Err(PublishError::InvalidCredentials)
        }
    }

    fn determine_name(&self, repo_path: &Path, logger: &Logger) -> Result<String> {
        let name = match &self.options.name {
            Some(name) => name.clone(),
            None => {
                let name = directory_name(repo_path).ok_or_else(|| {
                    PublishError::InvalidArgument(format!(
                        "cannot derive a repository name from '{}'; use --name",
                        repo_path.display()
                    ))
                })?;
                logger.info(&format!("Using directory name as repository name: {}", name));
                name
            }
        };

        validation::validate_repository_name(&name)
            .map_err(|e| PublishError::InvalidArgument(e.to_string()))?;
        Ok(name)
    }

    fn remote_url(&self, repository: &RepositoryResource) -> String {
        match (&repository.ssh_url, self.options.use_ssh) {
            (Some(ssh_url), true) => ssh_url.clone(),
            (None, true) => {
                tracing::warn!("GitHub returned no ssh_url; linking over HTTPS");
                repository.clone_url.clone()
            }
            _ => repository.clone_url.clone(),
        }
    }

    fn report_unlinked(logger: &Logger, repository: &RepositoryResource) {
        logger.warn(&format!(
            "Repository {} was created but is not linked to the local copy",
            repository.html_url
        ));
    }

    fn report_unpushed(logger: &Logger, repository: &RepositoryResource) {
        logger.warn(&format!(
            "Repository {} was created and linked but not pushed",
            repository.html_url
        ));
    }
}

#[async_trait]
impl Command for PublishCommand {
    type Output = PublishOutcome;

    async fn execute(&self, context: &CommandContext) -> Result<PublishOutcome> {
        tracing::debug!(options = ?self.options, "starting publish");
        let mut logger = Logger::new(env!("CARGO_PKG_NAME"));

        let client = self.authenticate(&logger, context.prompt.as_ref()).await?;
        let owner = match client.get_username().await {
            Ok(login) => {
                logger.info(&format!("Authenticated as {}", login));
                Some(login)
            }
            Err(e) => {
                tracing::debug!(error = %e, "could not look up the authenticated user");
                None
            }
        };

        let repo_path = resolve_repo_path(&self.options.path)
            .map_err(|_| PublishError::NotARepository(self.options.path.clone()))?;
        if !git::is_repository(&repo_path) {
            return Err(PublishError::NotARepository(repo_path));
        }

        validation::validate_options(&self.options)
            .map_err(|e| PublishError::InvalidArgument(e.to_string()))?;

        let name = self.determine_name(&repo_path, &logger)?;
        logger.relabel(name.as_str());

        logger.info(&format!("Creating GitHub repository: {}", name));
        let request = RepositoryRequest::new(name.as_str())
            .with_description(self.options.description.as_str())
            .private(self.options.private);
        let repository = client.create_repository(&request).await?;
        logger.success(&format!(
            "Repository created successfully: {}",
            repository.html_url
        ));

        let remote = self.options.remote.as_str();
        let remote_url = self.remote_url(&repository);
        let remote_action = git::configure_remote(&repo_path, remote, &remote_url).map_err(|e| {
            Self::report_unlinked(&logger, &repository);
            PublishError::RemoteConfiguration {
                remote: remote.to_string(),
                reason: e.to_string(),
                repository_url: repository.html_url.clone(),
            }
        })?;
        logger.success(&format!("Remote '{}' configured to: {}", remote, remote_url));

        let pushed_branch = if self.options.push {
            logger.info(&format!("Pushing to remote '{}'...", remote));
            let branch = git::publish_branch(&repo_path, remote, self.options.branch.as_deref())
                .map_err(|e| {
                    Self::report_unpushed(&logger, &repository);
                    PublishError::Publish {
                        remote: remote.to_string(),
                        reason: e.to_string(),
                        repository_url: repository.html_url.clone(),
                    }
                })?;
            logger.success("Push successful!");
            Some(branch)
        } else {
            logger.info("Skipping push");
            None
        };

        Ok(PublishOutcome {
            repository,
            owner,
            remote_url,
            remote_action,
            pushed_branch,
        })
    }
}
