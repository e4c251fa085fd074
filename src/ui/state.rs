use tracing::debug;

use super::backend::SearchBackend;
use crate::types::RepositorySummary;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResultState {
    Idle,
    Loading,
    Success(Vec<RepositorySummary>),
    Error(String),
}

/// The search form: the text box plus whatever the last submit produced.
#[derive(Debug, Clone)]
pub struct SearchPage {
    query_text: String,
    state: SearchResultState,
}

impl SearchPage {
    pub fn new(default_query: impl Into<String>) -> Self {
        SearchPage {
            query_text: default_query.into(),
            state: SearchResultState::Idle,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn state(&self) -> &SearchResultState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchResultState::Loading
    }

    /// Typing only changes the text. Nothing is fetched until submit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    /// Enter `Loading` and return the query to send, or `None` if a search
    /// is already in flight (the submit button is disabled then).
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_loading() {
            debug!("Ignoring submit while a search is in flight");
            return None;
        }
        self.state = SearchResultState::Loading;
        Some(self.query_text.clone())
    }

    /// Settle the in-flight search. Both outcomes leave `Loading`.
    pub fn complete(&mut self, outcome: Result<Vec<RepositorySummary>, String>) {
        self.state = match outcome {
            Ok(results) => SearchResultState::Success(results),
            Err(message) => SearchResultState::Error(message),
        };
    }

    /// Full submit cycle against a backend. Returns false if the submit was
    /// ignored because another one was still running.
    pub async fn submit(&mut self, backend: &dyn SearchBackend) -> bool {
        let Some(query) = self.begin_submit() else {
            return false;
        };
        let outcome = backend.fetch(&query).await;
        self.complete(outcome);
        true
    }
}
