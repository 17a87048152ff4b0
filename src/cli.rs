use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::github::GitHubClient;

/// Audit dependency licenses against a deny-list and report violations on GitHub
#[derive(Parser, Debug)]
#[command(name = "license-audit")]
#[command(version)]
#[command(
    about = "Audit dependency licenses against a deny-list and report violations on GitHub",
    long_about = None
)]
pub struct Args {
    /// GitHub token used for check runs and issues (falls back to GITHUB_TOKEN)
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Denied license identifiers, comma or newline separated (substring match)
    #[arg(short, long, env = "INPUT_LICENSES", value_name = "LIST")]
    pub licenses: Option<String>,

    /// Read a pre-generated `cargo license --json` listing instead of running cargo-license
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to the Cargo.toml of the project to audit
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Path to a config file (defaults to ./license-audit.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the check run (default: "License audit")
    #[arg(long, value_name = "NAME")]
    pub check_name: Option<String>,

    /// Root of the GitHub REST API
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = GitHubClient::DEFAULT_API_URL,
        value_name = "URL"
    )]
    pub api_url: String,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
