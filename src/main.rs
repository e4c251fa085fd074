use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use std::error::Error;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod github;
mod query;
mod server;
mod types;
mod ui;

use config::GitFreshConfig;

#[derive(Parser)]
#[command(name = "gitfresh")]
#[command(about = "Find GitHub repositories that were pushed to in the last week", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the search page and the /api/search proxy
    Serve {
        /// Address to listen on (default 127.0.0.1:3000)
        #[arg(long, env = "GITFRESH_BIND")]
        bind: Option<String>,
        /// GitHub API base URL
        #[arg(long = "api-url", env = "GITHUB_API_URL", value_hint = ValueHint::Url)]
        api_url: Option<String>,
        /// Token sent to GitHub as a bearer credential
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
    /// Search from the terminal through a running gitfresh server
    Search {
        /// GitHub search query (e.g. "language:rust topic:cli")
        query: String,
        /// Base URL of the gitfresh server
        #[arg(
            long,
            env = "GITFRESH_SERVER",
            default_value = "http://127.0.0.1:3000",
            value_hint = ValueHint::Url
        )]
        server: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gitfresh=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli).await {
        eprintln!("gitfresh: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        None => commands::display_banner(),
        Some(Commands::Serve {
            bind,
            api_url,
            token,
        }) => {
            let config = GitFreshConfig::load()?.with_overrides(bind, api_url);
            commands::serve(config, token).await?;
        }
        Some(Commands::Search { query, server }) => {
            commands::search_repos(&server, &query).await?;
        }
        Some(Commands::Completions { shell }) => commands::generate_completions(shell),
    }
    Ok(())
}
