use anyhow::Result;
use clap::Parser;
use desktop_downloads::{
    commands::{Config, check, serve},
    github::DEFAULT_REPO,
    http::DEFAULT_TIMEOUT_SECS,
};
use std::net::SocketAddr;
use std::time::Duration;

/// desktop-downloads - download page backend for the desktop app
///
/// Looks up the latest GitHub release of the app and sorts its installers
/// into macOS, Windows and Linux downloads.
///
/// Examples:
///   desktop-downloads serve      # Serve /api/download-desktop-app
///   desktop-downloads check      # Print what the download page would show
#[derive(Parser, Debug)]
#[command(author, version = env!("DOWNLOADS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub repository whose releases are offered
    #[arg(
        long,
        env = "DOWNLOADS_REPO",
        value_name = "OWNER/REPO",
        default_value = DEFAULT_REPO,
        global = true
    )]
    pub repo: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "DOWNLOADS_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Timeout for GitHub API requests, in seconds
    #[arg(
        long,
        env = "DOWNLOADS_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    pub timeout: u64,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the downloads endpoint over HTTP
    Serve(ServeArgs),

    /// Fetch the latest release and print its classified assets
    Check,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(
        long,
        env = "DOWNLOADS_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:3000"
    )]
    pub listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Serve(_) => "info",
        Commands::Check => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::new(&cli.repo, cli.api_url, Duration::from_secs(cli.timeout))?;

    match cli.command {
        Commands::Serve(args) => serve(config, args.listen).await?,
        Commands::Check => check(config).await?,
    }
    Ok(())
}
