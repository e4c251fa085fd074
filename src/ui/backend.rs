use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::github::GitHubSearch;
use crate::types::{ErrorBody, RepositorySummary};

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch data.";

/// Where the search form sends its query.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<RepositorySummary>, String>;
}

/// Talks to a running gitfresh server over `/api/search`.
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        ProxyClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SearchBackend for ProxyClient {
    async fn fetch(&self, query: &str) -> Result<Vec<RepositorySummary>, String> {
        let url = format!(
            "{}/api/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        debug!("Searching via {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            e.to_string()
        })?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(message);
        }

        response
            .json::<Vec<RepositorySummary>>()
            .await
            .map_err(|e| e.to_string())
    }
}

/// In-process backend for the server-rendered page: same outcome the
/// browser would get from `/api/search`, minus the extra hop.
#[async_trait]
impl SearchBackend for GitHubSearch {
    async fn fetch(&self, query: &str) -> Result<Vec<RepositorySummary>, String> {
        let items = self
            .search(Some(query))
            .await
            .map_err(|e| e.public_message().to_string())?;

        items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!("Unexpected repository record from GitHub: {}", e);
                GENERIC_FAILURE_MESSAGE.to_string()
            })
    }
}
