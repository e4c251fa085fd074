use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_QUERY: &str = "language:python";

/// Optional settings file. Every field falls back to a default, and CLI
/// flags or environment variables win over whatever is stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GitFreshConfig {
    pub bind: String,
    pub api_url: String,
    pub default_query: String,
    pub timeout_secs: Option<u64>,
}

impl Default for GitFreshConfig {
    fn default() -> Self {
        GitFreshConfig {
            bind: DEFAULT_BIND.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            timeout_secs: None,
        }
    }
}

impl GitFreshConfig {
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> Option<PathBuf> {
        let home = std::env::var("HOME").ok()?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("gitfresh")
                .join("config.json"),
        )
    }

    /// Fold CLI/env overrides on top of the file values.
    pub fn with_overrides(mut self, bind: Option<String>, api_url: Option<String>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|_| ConfigError::Bind(self.bind.clone()))
    }
}
