//! Raw GitHub API response models

use serde::Deserialize;

/// Body of a `/search/repositories` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total_count: Option<u64>,
    #[serde(default)]
    pub items: Vec<RepoItem>,
}

/// One repository item from the search response
#[derive(Debug, Clone, Deserialize)]
pub struct RepoItem {
    pub name: String,
    pub created_at: String,
    pub owner: RepoOwner,
    /// Commit-list URL template, ends in a `{/sha}` placeholder
    pub commits_url: String,
}

/// Owner block of a repository item
#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub url: String,
    pub avatar_url: String,
}

/// One element of a commit-list response
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub sha: String,
    pub commit: CommitBody,
}

/// The `commit` block of a commit-list element
#[derive(Debug, Clone, Deserialize)]
pub struct CommitBody {
    pub message: String,
    /// Git author; absent for some imported commits
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

/// Git author of a commit
#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
}
