//! Common test support utilities and fixtures

#![allow(dead_code)]

use ghcreate::credentials::TokenPrompt;
use std::{fs, path::Path, path::PathBuf, process::Command};
use tempfile::TempDir;

/// Branch every fixture repository is created on
pub const FIXTURE_BRANCH: &str = "trunk";

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the ghcreate CLI with given arguments and a clean GitHub environment
pub fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--"]);
    cmd.args(args);
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env_remove("GITHUB_API_URL");
    cmd.env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub fn git(path: &Path, args: &[&str]) -> std::process::Output {
    Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("Failed to run git")
}

/// stdout of a git command, trimmed
pub fn git_stdout(path: &Path, args: &[&str]) -> String {
    String::from_utf8_lossy(&git(path, args).stdout)
        .trim()
        .to_string()
}

/// Initialize a git repository on [`FIXTURE_BRANCH`] with one commit
pub fn init_git_repo(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;

    git(path, &["init", "--quiet"]);
    git(path, &["checkout", "--quiet", "-b", FIXTURE_BRANCH]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Test Repository")?;
    git(path, &["add", "."]);
    git(path, &["commit", "--quiet", "-m", "Initial commit"]);

    Ok(())
}

/// Create a bare repository to act as the push target
pub fn init_bare_repo(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    git(path, &["init", "--quiet", "--bare"]);
    Ok(())
}

/// A working copy named `name` and an empty bare remote inside one temp dir
pub struct Fixture {
    pub root: TempDir,
    pub repo: PathBuf,
    pub bare: PathBuf,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let repo = root.path().join(name);
        let bare = root.path().join("remote.git");
        init_git_repo(&repo).expect("Failed to initialize git repo");
        init_bare_repo(&bare).expect("Failed to initialize bare repo");
        Self { root, repo, bare }
    }

    pub fn bare_url(&self) -> String {
        self.bare.to_string_lossy().into_owned()
    }
}

/// Prompt that answers with a fixed token
pub struct FixedPrompt(pub &'static str);

impl TokenPrompt for FixedPrompt {
    fn prompt_token(&self) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Prompt that must not be reached
pub struct NoPrompt;

impl TokenPrompt for NoPrompt {
    fn prompt_token(&self) -> anyhow::Result<String> {
        panic!("token prompt should not be shown")
    }
}

/// JSON body GitHub returns after creating `name`
pub fn created_repo_body(name: &str, clone_url: &str) -> String {
    serde_json::json!({
        "id": 1,
        "name": name,
        "full_name": format!("testuser/{}", name),
        "private": false,
        "html_url": format!("https://github.com/testuser/{}", name),
        "clone_url": clone_url,
        "ssh_url": format!("git@github.com:testuser/{}.git", name),
    })
    .to_string()
}
