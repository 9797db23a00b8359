//! Repository search call and newest-first selection

use super::models::{RepoItem, SearchResponse};
use crate::config::GithubSettings;
use crate::network::HttpClient;
use chrono::NaiveDateTime;
use tracing::warn;

/// Whole-second prefix format of GitHub's `created_at` timestamps
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Raw search output: total count plus the items as returned upstream
#[derive(Debug, Default)]
pub struct SearchPage {
    pub total_count: Option<u64>,
    pub items: Vec<RepoItem>,
}

/// Client for the repository-search endpoint
#[derive(Clone)]
pub struct SearchClient {
    client: HttpClient,
    endpoint: String,
    credentials: Vec<(String, String)>,
}

impl SearchClient {
    /// Create a new search client from the GitHub settings
    pub fn new(client: HttpClient, settings: &GithubSettings) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/search/repositories",
                settings.api_base.trim_end_matches('/')
            ),
            credentials: settings.credential_params(),
        }
    }

    /// Search repositories by name.
    ///
    /// Failures degrade instead of propagating: a failed request, a non-200
    /// status, or an unparseable body all yield an empty page with
    /// `total_count: None` and a logged warning.
    pub async fn search(&self, term: &str) -> SearchPage {
        let mut params = vec![
            ("q".to_string(), format!("{} in:name", term)),
            ("page".to_string(), "1".to_string()),
        ];
        params.extend(self.credentials.iter().cloned());

        let response = match self.client.get_with_params(&self.endpoint, &params).await {
            Ok(response) => response,
            Err(e) => {
                warn!("repository search request failed: {}", e);
                return SearchPage::default();
            }
        };

        if !response.is_success() {
            warn!(
                "repository search returned {}: {}",
                response.status, response.text
            );
            return SearchPage::default();
        }

        match response.json::<SearchResponse>() {
            Ok(body) => SearchPage {
                total_count: body.total_count,
                items: body.items,
            },
            Err(e) => {
                warn!("repository search body did not parse: {}", e);
                SearchPage::default()
            }
        }
    }
}

/// Select the `limit` most recently created items, newest first.
///
/// Timestamps are compared at whole-second precision. Items whose
/// `created_at` does not parse are dropped with a warning. The sort is
/// stable, so ties keep upstream order.
pub fn select_newest(items: Vec<RepoItem>, limit: usize) -> Vec<(RepoItem, NaiveDateTime)> {
    let mut dated: Vec<(RepoItem, NaiveDateTime)> = items
        .into_iter()
        .filter_map(|item| match parse_created_at(&item.created_at) {
            Some(ts) => Some((item, ts)),
            None => {
                warn!(
                    "dropping {}: unparseable created_at {:?}",
                    item.name, item.created_at
                );
                None
            }
        })
        .collect();

    dated.sort_by(|a, b| b.1.cmp(&a.1));
    dated.truncate(limit);
    dated
}

/// Parse a `created_at` value truncated to whole seconds
pub fn parse_created_at(raw: &str) -> Option<NaiveDateTime> {
    let head = raw.get(..19)?;
    NaiveDateTime::parse_from_str(head, CREATED_AT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::models::RepoOwner;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item(name: &str, created_at: &str) -> RepoItem {
        RepoItem {
            name: name.to_string(),
            created_at: created_at.to_string(),
            owner: RepoOwner {
                login: "owner".to_string(),
                url: "https://api.github.com/users/owner".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
            },
            commits_url: format!("https://api.github.com/repos/owner/{}/commits{{/sha}}", name),
        }
    }

    fn test_settings(api_base: &str) -> GithubSettings {
        GithubSettings {
            api_base: api_base.to_string(),
            client_id: None,
            client_secret: None,
        }
    }

    #[test]
    fn test_parse_created_at() {
        let ts = parse_created_at("2024-03-01T10:20:30Z").unwrap();
        assert_eq!(ts.to_string(), "2024-03-01 10:20:30");

        // Sub-second precision is truncated, not rejected
        assert!(parse_created_at("2024-03-01T10:20:30.123Z").is_some());

        assert!(parse_created_at("not a date").is_none());
        assert!(parse_created_at("").is_none());
    }

    #[test]
    fn test_select_newest_truncates_to_limit() {
        let items = vec![
            item("a", "2024-01-03T00:00:00Z"),
            item("b", "2024-01-07T00:00:00Z"),
            item("c", "2024-01-01T00:00:00Z"),
            item("d", "2024-01-08T00:00:00Z"),
            item("e", "2024-01-02T00:00:00Z"),
            item("f", "2024-01-05T00:00:00Z"),
            item("g", "2024-01-06T00:00:00Z"),
            item("h", "2024-01-04T00:00:00Z"),
        ];

        let selected = select_newest(items, 5);
        let names: Vec<&str> = selected.iter().map(|(i, _)| i.name.as_str()).collect();
        assert_eq!(names, vec!["d", "b", "g", "f", "h"]);
    }

    #[test]
    fn test_select_newest_keeps_upstream_order_on_ties() {
        let items = vec![
            item("first", "2024-01-01T12:00:00Z"),
            item("second", "2024-01-01T12:00:00Z"),
        ];

        let selected = select_newest(items, 5);
        assert_eq!(selected[0].0.name, "first");
        assert_eq!(selected[1].0.name, "second");
    }

    #[test]
    fn test_select_newest_drops_unparseable() {
        let items = vec![
            item("good", "2024-01-01T00:00:00Z"),
            item("bad", "yesterday"),
        ];

        let selected = select_newest(items, 5);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0.name, "good");
    }

    #[tokio::test]
    async fn test_search_builds_name_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("q", "tetris in:name"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 1,
                "items": [{
                    "name": "tetris",
                    "created_at": "2024-03-01T10:20:30Z",
                    "owner": {
                        "login": "octocat",
                        "url": "https://api.github.com/users/octocat",
                        "avatar_url": "https://avatars.githubusercontent.com/u/1"
                    },
                    "commits_url": "https://api.github.com/repos/octocat/tetris/commits{/sha}"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SearchClient::new(HttpClient::new().unwrap(), &test_settings(&server.uri()));
        let page = client.search("tetris").await;

        assert_eq!(page.total_count, Some(1));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "tetris");
    }

    #[tokio::test]
    async fn test_search_degrades_on_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string("{\"message\":\"rate limited\"}"),
            )
            .mount(&server)
            .await;

        let client = SearchClient::new(HttpClient::new().unwrap(), &test_settings(&server.uri()));
        let page = client.search("tetris").await;

        assert_eq!(page.total_count, None);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_search_degrades_on_unparseable_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = SearchClient::new(HttpClient::new().unwrap(), &test_settings(&server.uri()));
        let page = client.search("tetris").await;

        assert_eq!(page.total_count, None);
        assert!(page.items.is_empty());
    }
}
