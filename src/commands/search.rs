use reqwest::Client;
use std::error::Error;
use std::fmt::Write;

use crate::ui::render::{LOADING_TEXT, NO_RESULTS_TEXT};
use crate::ui::{DateStyle, ProxyClient, SearchPage, SearchResultState};

/// Terminal version of the search page, talking to a running server.
/// A search that ends in the error state is returned as an error.
pub async fn search_repos(server: &str, query: &str) -> Result<(), Box<dyn Error>> {
    let dates = date_style_from_env(|name| std::env::var(name).ok());

    let client = Client::builder()
        .user_agent(concat!("gitfresh/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let proxy = ProxyClient::new(client, server);

    let mut page = SearchPage::new(query);
    eprintln!("{}", render_terminal(&SearchResultState::Loading, dates));
    page.submit(&proxy).await;

    println!("{}", settle(page.state(), dates)?);
    Ok(())
}

/// POSIX precedence: `LC_ALL`, then `LC_TIME`, then `LANG`.
pub fn date_style_from_env(lookup: impl Fn(&str) -> Option<String>) -> DateStyle {
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .map(|value| DateStyle::from_language_tag(&value))
        .unwrap_or_default()
}

/// What to print for a finished search, or the message to fail with.
fn settle(state: &SearchResultState, dates: DateStyle) -> Result<String, String> {
    match state {
        SearchResultState::Error(message) => Err(message.clone()),
        other => Ok(render_terminal(other, dates)),
    }
}

pub fn render_terminal(state: &SearchResultState, dates: DateStyle) -> String {
    match state {
        SearchResultState::Idle => String::new(),
        SearchResultState::Loading => LOADING_TEXT.to_string(),
        SearchResultState::Error(message) => format!("Error: {}", message),
        SearchResultState::Success(results) if results.is_empty() => NO_RESULTS_TEXT.to_string(),
        SearchResultState::Success(results) => {
            let mut out = format!("\nFound {} recently active repositories:\n\n", results.len());
            for repo in results {
                let _ = writeln!(out, "  {}", repo.full_name);
                let _ = writeln!(
                    out,
                    "    ⭐ {} | 🍴 {} | Last push: {}",
                    repo.stargazers_count,
                    repo.forks_count,
                    dates.format_timestamp(&repo.updated_at)
                );
                if let Some(desc) = &repo.description {
                    let _ = writeln!(out, "    {}", desc);
                }
                let _ = writeln!(out, "    {}\n", repo.html_url);
            }
            out
        }
    }
}
