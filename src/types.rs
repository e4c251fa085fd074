use serde::{Deserialize, Serialize};

/// The slice of a GitHub repository record the UI actually shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepositorySummary {
    pub id: u64,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: String,
}

/// Upstream search envelope. Items stay untyped so they can be handed
/// back to the caller exactly as GitHub sent them.
#[derive(Deserialize, Debug)]
pub struct GitHubSearchResponse {
    pub items: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
