//! Navigation pipeline and the concurrent enrichment fan-out

use super::models::{CommitDetail, EnrichedRepo, NavigatorOutcome, RepoSummary};
use crate::config::GithubSettings;
use crate::github::{self, CommitEntry, SearchClient};
use crate::network::HttpClient;
use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why one enrichment task produced no commit detail
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("commit lookup returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("commit lookup request failed: {0}")]
    Network(anyhow::Error),
    #[error("commit list body did not parse: {0}")]
    Parse(anyhow::Error),
}

/// Coordinates the search -> select -> enrich pipeline
pub struct Navigator {
    client: HttpClient,
    search: SearchClient,
    credentials: Vec<(String, String)>,
}

impl Navigator {
    /// Create a new navigator from the GitHub settings
    pub fn new(client: HttpClient, settings: &GithubSettings) -> Self {
        Self {
            search: SearchClient::new(client.clone(), settings),
            credentials: settings.credential_params(),
            client,
        }
    }

    /// Run one navigation: search repositories by name, select the newest
    /// five, and enrich each with its latest commit.
    ///
    /// A failed search or a zero match count short-circuits; no enrichment
    /// task is launched for an empty selection.
    pub async fn navigate(&self, term: &str) -> NavigatorOutcome {
        let page = self.search.search(term).await;

        let selected = match page.total_count {
            Some(n) if n > 0 => github::select_newest(page.items, crate::SELECT_LIMIT),
            _ => Vec::new(),
        };

        let summaries: Vec<RepoSummary> = selected
            .into_iter()
            .map(|(item, ts)| RepoSummary::from_item(item, ts))
            .collect();

        info!(
            "navigating '{}': {} of {:?} matches selected",
            term,
            summaries.len(),
            page.total_count
        );

        NavigatorOutcome {
            total_count: page.total_count,
            repos: self.enrich(summaries).await,
        }
    }

    /// Fan out one latest-commit lookup per summary and merge the results
    /// back in rank order.
    ///
    /// All lookups are launched eagerly and joined together; a failed
    /// lookup degrades its own entry to the empty commit detail and never
    /// disturbs its siblings. Output order always equals input order.
    pub async fn enrich(&self, summaries: Vec<RepoSummary>) -> Vec<EnrichedRepo> {
        let tasks: Vec<_> = summaries
            .iter()
            .map(|summary| self.fetch_latest_commit(summary))
            .collect();

        let outcomes = join_all(tasks).await;

        summaries
            .into_iter()
            .zip(outcomes)
            .enumerate()
            .map(|(idx, (summary, outcome))| {
                let commit = match outcome {
                    Ok(detail) => detail,
                    Err(e) => {
                        warn!("enrichment of {} degraded: {}", summary.name, e);
                        CommitDetail::default()
                    }
                };
                EnrichedRepo::merge(idx as u32 + 1, summary, commit)
            })
            .collect()
    }

    /// Fetch the latest commit for one repository.
    ///
    /// An empty commit list is a success carrying the empty detail; only
    /// transport, status, and parse problems are errors.
    async fn fetch_latest_commit(&self, summary: &RepoSummary) -> Result<CommitDetail, EnrichError> {
        let url = commits_endpoint(&summary.commits_url);
        debug!("fetching latest commit for {} from {}", summary.name, url);

        let response = self
            .client
            .get_with_params(&url, &self.credentials)
            .await
            .map_err(EnrichError::Network)?;

        if !response.is_success() {
            return Err(EnrichError::Status {
                status: response.status,
                body: response.text,
            });
        }

        let entries: Vec<CommitEntry> = response.json().map_err(EnrichError::Parse)?;

        Ok(entries.first().map(CommitDetail::from).unwrap_or_default())
    }
}

/// Derive the effective commit-list endpoint from its URL template by
/// truncating at the first `{`
pub fn commits_endpoint(template: &str) -> String {
    match template.find('{') {
        Some(idx) => template[..idx].to_string(),
        None => template.to_string(),
    }
}
