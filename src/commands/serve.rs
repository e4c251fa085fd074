use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::GitFreshConfig;
use crate::github::GitHubSearch;
use crate::server::{self, AppState};

pub async fn serve(config: GitFreshConfig, token: Option<String>) -> Result<(), Box<dyn Error>> {
    let addr = config.bind_addr()?;
    if token.as_deref().map_or(true, str::is_empty) {
        warn!("GITHUB_TOKEN is not set; GitHub will apply anonymous rate limits");
    }

    let github = GitHubSearch::new(
        &config.api_url,
        token,
        config.timeout_secs.map(Duration::from_secs),
    )?;
    info!("Forwarding searches to {}", config.api_url);

    let state = Arc::new(AppState {
        github,
        default_query: config.default_query,
    });
    server::run(addr, state).await?;
    Ok(())
}
