//! Navigation orchestration module
//!
//! Selects the newest repositories from a search page and enriches each
//! one with its latest commit, fetched concurrently.

mod executor;
mod models;

pub use executor::{commits_endpoint, EnrichError, Navigator};
pub use models::*;
