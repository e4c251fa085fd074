use chrono::NaiveDate;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::error::{ConfigError, SearchError};
use crate::query;
use crate::types::GitHubSearchResponse;

pub const PER_PAGE: u32 = 20;

const USER_AGENT: &str = concat!("gitfresh/", env!("CARGO_PKG_VERSION"));

/// Repository search against GitHub with the recency filter bolted on.
pub struct GitHubSearch {
    client: Client,
    api_url: String,
    token: Option<String>,
    today: fn() -> NaiveDate,
}

impl GitHubSearch {
    pub fn new(
        api_url: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(GitHubSearch {
            client: builder.build()?,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            today: query::utc_today,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run one search and hand back GitHub's `items` untouched.
    #[tracing::instrument(skip(self))]
    pub async fn search(
        &self,
        raw_query: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, SearchError> {
        let raw_query = match raw_query {
            Some(q) if !q.is_empty() => q,
            _ => return Err(SearchError::MissingQuery),
        };

        let augmented = query::augment(raw_query, (self.today)());
        debug!("Augmented query: {}", augmented);

        self.request(&augmented).await.map_err(|e| {
            error!("GitHub search failed for '{}': {:?}", augmented, e);
            SearchError::Upstream(e)
        })
    }

    async fn request(&self, augmented: &str) -> Result<Vec<serde_json::Value>, reqwest::Error> {
        let url = format!(
            "{}/search/repositories?q={}&sort=updated&order=desc&per_page={}",
            self.api_url,
            urlencoding::encode(augmented),
            PER_PAGE
        );

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?.error_for_status()?;
        let result = response.json::<GitHubSearchResponse>().await?;
        Ok(result.items)
    }
}
