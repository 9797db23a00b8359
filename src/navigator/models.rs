//! Navigation data models

use crate::github::{CommitEntry, RepoItem};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Immutable summary of one selected repository
#[derive(Debug, Clone)]
pub struct RepoSummary {
    pub name: String,
    /// Display form of the creation timestamp
    pub created_at: String,
    /// Parsed creation timestamp, used only for ranking
    pub created_at_ts: NaiveDateTime,
    pub owner_login: String,
    pub owner_url: String,
    pub owner_avatar_url: String,
    /// Commit-list URL template as returned upstream (may contain `{/sha}`)
    pub commits_url: String,
}

impl RepoSummary {
    /// Build a summary from a raw search item and its parsed timestamp
    pub fn from_item(item: RepoItem, created_at_ts: NaiveDateTime) -> Self {
        Self {
            created_at: item.created_at.replace('T', " ").replace('Z', ""),
            name: item.name,
            created_at_ts,
            owner_login: item.owner.login,
            owner_url: item.owner.url,
            owner_avatar_url: item.owner.avatar_url,
            commits_url: item.commits_url,
        }
    }
}

/// Latest-commit metadata for one repository.
///
/// The default value (all fields empty) stands in when the lookup fails or
/// the repository has no commits yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitDetail {
    pub sha: String,
    pub message: String,
    pub author_name: String,
}

impl From<&CommitEntry> for CommitDetail {
    fn from(entry: &CommitEntry) -> Self {
        Self {
            sha: entry.sha.clone(),
            message: entry.commit.message.clone(),
            author_name: entry
                .commit
                .author
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
        }
    }
}

/// One repository summary merged with its latest commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRepo {
    /// Rank (1-based) among the selected repositories
    pub id: u32,
    pub repo_name: String,
    pub created_at: String,
    pub owner_login: String,
    pub owner_url: String,
    pub owner_avatar_url: String,
    pub sha: String,
    pub commit_message: String,
    pub commit_author_name: String,
}

impl EnrichedRepo {
    /// Merge a summary with its commit detail under the given ordinal
    pub fn merge(id: u32, summary: RepoSummary, commit: CommitDetail) -> Self {
        Self {
            id,
            repo_name: summary.name,
            created_at: summary.created_at,
            owner_login: summary.owner_login,
            owner_url: summary.owner_url,
            owner_avatar_url: summary.owner_avatar_url,
            sha: commit.sha,
            commit_message: commit.message,
            commit_author_name: commit.author_name,
        }
    }
}

/// Final outcome of one navigation request
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavigatorOutcome {
    /// Total match count reported upstream; `None` when the search failed
    pub total_count: Option<u64>,
    /// Enriched repositories, ordered by rank
    pub repos: Vec<EnrichedRepo>,
}
