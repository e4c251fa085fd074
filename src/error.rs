use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::ErrorBody;

pub const MISSING_QUERY_MESSAGE: &str = "Search parameter \"q\" is required";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch data from GitHub";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("missing search query")]
    MissingQuery,

    /// Anything that went wrong talking to GitHub. The cause stays server-side.
    #[error("GitHub search request failed: {0}")]
    Upstream(#[source] reqwest::Error),
}

impl SearchError {
    /// What the caller gets to see.
    pub fn public_message(&self) -> &'static str {
        match self {
            SearchError::MissingQuery => MISSING_QUERY_MESSAGE,
            SearchError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::MissingQuery => StatusCode::BAD_REQUEST,
            SearchError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file {} is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid bind address '{0}'")]
    Bind(String),

    #[error("can't build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
