//! HTML for the search page. Everything here is a pure function of the
//! page state.

use std::fmt::Write;

use super::locale::DateStyle;
use super::state::{SearchPage, SearchResultState};
use crate::types::RepositorySummary;

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_TEXT: &str =
    "No repositories with recent activity found. Try another search.";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#111827;color:#f9fafb;margin:0}\
main{max-width:42rem;margin:0 auto;padding:3rem 1rem}\
h1{text-align:center}\
form{display:flex}\
input{flex-grow:1;padding:.75rem;background:#1f2937;color:inherit;border:1px solid #374151}\
button{padding:.75rem;background:#2563eb;color:#fff;font-weight:bold;border:0}\
button:disabled{opacity:.5}\
.status{text-align:center;color:#9ca3af}\
.error{text-align:center;color:#ef4444}\
.card{background:#1f2937;padding:1rem;margin-top:1rem;border:1px solid #374151;border-radius:.5rem}\
.card a{color:#60a5fa;font-size:1.25rem;font-weight:bold}\
.meta span{margin-right:1rem;font-size:.875rem}";

// Disables the button and shows the indicator while the browser waits
// for the next page.
const SUBMIT_SCRIPT: &str = "\
document.getElementById('search').addEventListener('submit',function(){\
var b=this.querySelector('button');b.disabled=true;b.textContent='Searching...';\
document.getElementById('results').innerHTML='<p class=\"status\">Loading...</p>';});";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &SearchPage, dates: DateStyle) -> String {
    let loading = page.is_loading();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str("<title>Active Repository Finder</title>");
    let _ = write!(html, "<style>{}</style></head><body><main>", STYLE);
    html.push_str("<h1>Active Repository Finder</h1>");

    // Server-rendered: submitting reloads `/?q=...`, which runs the search
    // in-process instead of calling `/api/search` from the browser.
    let _ = write!(
        html,
        "<form id=\"search\" method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"q\" value=\"{}\" \
         placeholder=\"e.g. language:python topic:machine-learning\">\
         <button type=\"submit\"{}>{}</button></form>",
        escape(page.query_text()),
        if loading { " disabled" } else { "" },
        if loading { "Searching..." } else { "Search" }
    );

    let _ = write!(html, "<div id=\"results\">{}</div>", render_results(page.state(), dates));
    let _ = write!(html, "<script>{}</script></main></body></html>", SUBMIT_SCRIPT);
    html
}

pub fn render_results(state: &SearchResultState, dates: DateStyle) -> String {
    match state {
        SearchResultState::Idle => String::new(),
        SearchResultState::Loading => format!("<p class=\"status\">{}</p>", LOADING_TEXT),
        SearchResultState::Error(message) => format!(
            "<p class=\"error\"><strong>Error:</strong> {}</p>",
            escape(message)
        ),
        SearchResultState::Success(results) if results.is_empty() => {
            format!("<p class=\"status\">{}</p>", NO_RESULTS_TEXT)
        }
        SearchResultState::Success(results) => {
            let mut html = String::from("<h2>Results</h2>");
            for repo in results {
                html.push_str(&render_card(repo, dates));
            }
            html
        }
    }
}

fn render_card(repo: &RepositorySummary, dates: DateStyle) -> String {
    let mut html = String::from("<div class=\"card\">");
    let _ = write!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(&repo.html_url),
        escape(&repo.full_name)
    );
    if let Some(desc) = &repo.description {
        let _ = write!(html, "<p>{}</p>", escape(desc));
    }
    let _ = write!(
        html,
        "<div class=\"meta\"><span>⭐ {} Stars</span><span>🍴 {} Forks</span>\
         <span>Last push: {}</span></div></div>",
        repo.stargazers_count,
        repo.forks_count,
        escape(&dates.format_timestamp(&repo.updated_at))
    );
    html
}
