//! GitHub API surface
//!
//! Raw response models, the repository-search call, and newest-first
//! selection of its results.

mod models;
mod search;

pub use models::{CommitAuthor, CommitBody, CommitEntry, RepoItem, RepoOwner, SearchResponse};
pub use search::{parse_created_at, select_newest, SearchClient, SearchPage};
