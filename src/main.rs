use clap::Parser;
use ghcreate::{
    Command, CommandContext, PublishCommand, PublishOptions, config, constants, git::Logger,
    utils::exit_codes,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghcreate")]
#[command(about = "Create a GitHub repository from a local Git repository")]
#[command(version)]
struct Cli {
    /// Path to the local Git repository
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Name for the GitHub repository (defaults to folder name)
    #[arg(short, long)]
    name: Option<String>,

    /// Repository description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Create a private repository
    #[arg(short, long)]
    private: bool,

    /// GitHub personal access token (can also use GITHUB_TOKEN env var)
    #[arg(short, long)]
    token: Option<String>,

    /// Name of the remote
    #[arg(short, long, default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
    remote: String,

    /// Branch to push (default: current branch)
    #[arg(short, long)]
    branch: Option<String>,

    /// Don't push to the new repository
    #[arg(long)]
    no_push: bool,

    /// Link the remote over SSH instead of HTTPS
    #[arg(long)]
    ssh: bool,

    /// GitHub API base URL (can also use GITHUB_API_URL env var)
    #[arg(long)]
    api_url: Option<String>,

    /// Print debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> PublishOptions {
        let mut options = PublishOptions::new(self.path)
            .with_description(self.description)
            .with_remote(self.remote)
            .with_api_url(config::resolve_api_url(self.api_url));

        if let Some(name) = self.name {
            options = options.with_name(name);
        }
        if let Some(token) = self.token {
            options = options.with_token(token);
        }
        if let Some(branch) = self.branch {
            options = options.with_branch(branch);
        }
        if self.private {
            options = options.private();
        }
        if self.no_push {
            options = options.no_push();
        }
        if self.ssh {
            options = options.use_ssh();
        }
        options
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = PublishCommand::new(cli.into_options());
    match command.execute(&CommandContext::default()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            Logger::new(env!("CARGO_PKG_NAME")).error(&format!("Error: {}", e));
            tracing::debug!(code, reason = exit_codes::describe_exit_code(code), "exiting");
            ExitCode::from(code)
        }
    }
}
