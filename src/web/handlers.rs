//! HTTP request handlers

use super::state::AppState;
use crate::navigator::EnrichedRepo;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Fallback message rendered when the repository list is empty
const EMPTY_MESSAGE: &str = "No result is found";

/// Query parameters for the navigator endpoint
#[derive(Debug, Deserialize)]
pub struct NavigatorParams {
    /// Repository name fragment to search for
    pub search_term: Option<String>,
    /// Output format ("json" for a JSON body, HTML otherwise)
    pub format: Option<String>,
}

/// Navigator response for JSON format
#[derive(Debug, Serialize)]
pub struct NavigatorResponse {
    pub total_count: Option<u64>,
    pub search_term: String,
    pub repo_info_list: Vec<EnrichedRepo>,
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Navigator handler: the five newest repositories matching the search
/// term, each with its latest commit
pub async fn navigator(
    State(state): State<AppState>,
    Query(params): Query<NavigatorParams>,
) -> Response {
    let search_term = params.search_term.unwrap_or_default();

    let outcome = state.navigator.navigate(&search_term).await;

    match params.format.as_deref() {
        Some("json") => Json(NavigatorResponse {
            total_count: outcome.total_count,
            search_term,
            repo_info_list: outcome.repos,
        })
        .into_response(),
        _ => {
            let mut ctx = Context::new();
            ctx.insert("instance_name", state.instance_name());
            ctx.insert("total_count", &outcome.total_count);
            ctx.insert("search_term", &search_term);
            ctx.insert("repo_info_list", &outcome.repos);
            ctx.insert("message", EMPTY_MESSAGE);

            match state.templates.render_with_context("navigator.html", &ctx) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    tracing::error!("Template error: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
                }
            }
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt() -> impl IntoResponse {
    (
        [(axum::http::header::CONTENT_TYPE, "text/plain")],
        "User-agent: *\nDisallow: /\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_shape() {
        let response = NavigatorResponse {
            total_count: None,
            search_term: "tetris".to_string(),
            repo_info_list: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["total_count"].is_null());
        assert_eq!(json["search_term"], "tetris");
        assert!(json["repo_info_list"].as_array().unwrap().is_empty());
    }
}
