use axum::extract::{Query, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::SearchError;
use crate::github::GitHubSearch;
use crate::ui::render::render_page;
use crate::ui::{DateStyle, SearchPage};

pub struct AppState {
    pub github: GitHubSearch,
    pub default_query: String,
}

#[derive(Deserialize, Debug)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/search", get(api_search))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await
}

async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<serde_json::Value>>, SearchError> {
    let items = state.github.search(params.q.as_deref()).await?;
    Ok(Json(items))
}

/// Server-rendered search page. A `q` parameter means the form was
/// submitted, so run the search before drawing.
async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Html<String> {
    let dates = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(DateStyle::from_language_tag)
        .unwrap_or_default();

    let mut page = SearchPage::new(state.default_query.clone());
    if let Some(q) = params.q {
        page.edit(q);
        page.submit(&state.github).await;
    }
    Html(render_page(&page, dates))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MISSING_QUERY_MESSAGE, UPSTREAM_FAILURE_MESSAGE};
    use crate::github::tests::search_for;
    use crate::ui::render::NO_RESULTS_TEXT;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use mockito::Matcher;
    use tower::ServiceExt;

    fn app_for(upstream: &str) -> Router {
        create_router(Arc::new(AppState {
            github: search_for(upstream),
            default_query: "language:python".to_string(),
        }))
    }

    async fn fetch_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_q_is_bad_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        for uri in ["/api/search", "/api/search?q="] {
            let (status, body) = fetch_page(app_for(&server.url()), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["error"], MISSING_QUERY_MESSAGE);
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_failure_is_generic() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"message":"API rate limit exceeded for 10.0.0.1"}"#)
            .create_async()
            .await;

        let (status, body) = fetch_page(app_for(&server.url()), "/api/search?q=rust").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("rate limit"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], UPSTREAM_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_generic() {
        let (status, body) = fetch_page(app_for("http://127.0.0.1:1"), "/api/search?q=rust").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], UPSTREAM_FAILURE_MESSAGE);
        assert!(!body.contains("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_empty_items_is_empty_array() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"total_count": 0, "items": []}"#)
            .create_async()
            .await;

        let (status, body) = fetch_page(app_for(&server.url()), "/api/search?q=rust").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_items_pass_through_in_order() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::UrlEncoded(
                "q".into(),
                "language:go pushed:>2024-06-03".into(),
            ))
            .with_status(200)
            .with_body(r#"{"items": [{"id": 2, "full_name": "b/b"}, {"id": 1, "full_name": "a/a"}]}"#)
            .create_async()
            .await;

        let (status, body) =
            fetch_page(app_for(&server.url()), "/api/search?q=language%3Ago").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": 2, "full_name": "b/b"}, {"id": 1, "full_name": "a/a"}])
        );
    }

    #[tokio::test]
    async fn test_index_idle() {
        let server = mockito::Server::new_async().await;
        let (status, body) = fetch_page(app_for(&server.url()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("value=\"language:python\""));
        assert!(body.contains("<div id=\"results\"></div>"));
    }

    #[tokio::test]
    async fn test_index_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "language:go pushed:>2024-06-03".into()),
                Matcher::UrlEncoded("sort".into(), "updated".into()),
                Matcher::UrlEncoded("order".into(), "desc".into()),
                Matcher::UrlEncoded("per_page".into(), "20".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items": [{
                    "id": 1,
                    "full_name": "a/b",
                    "html_url": "https://github.com/a/b",
                    "description": null,
                    "stargazers_count": 5,
                    "forks_count": 1,
                    "updated_at": "2024-06-09T00:00:00Z"
                }]}"#,
            )
            .create_async()
            .await;

        let response = app_for(&server.url())
            .oneshot(
                Request::builder()
                    .uri("/?q=language%3Ago")
                    .header("accept-language", "en-US,en;q=0.9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();

        mock.assert_async().await;
        assert!(body.contains(">a/b</a>"));
        assert!(body.contains("⭐ 5"));
        assert!(body.contains("🍴 1"));
        assert!(body.contains("6/9/2024"));
        assert!(body.contains("value=\"language:go\""));
    }

    #[tokio::test]
    async fn test_index_empty_results() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let (_, body) = fetch_page(app_for(&server.url()), "/?q=nothing-matches-this").await;
        assert!(body.contains(NO_RESULTS_TEXT));
    }

    #[tokio::test]
    async fn test_index_shows_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let (status, body) = fetch_page(app_for(&server.url()), "/?q=rust").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<strong>Error:</strong> Failed to fetch data from GitHub"));
    }

    #[tokio::test]
    async fn test_health() {
        let server = mockito::Server::new_async().await;
        let (status, body) = fetch_page(app_for(&server.url()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
