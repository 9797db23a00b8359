//! Reponav-RS: a GitHub repository navigator web service written in Rust
//!
//! Searches GitHub repositories by name, selects the five most recently
//! created matches, and enriches each one with its latest commit, fetched
//! concurrently.

pub mod config;
pub mod github;
pub mod logging;
pub mod navigator;
pub mod network;
pub mod web;

pub use config::Settings;
pub use navigator::{Navigator, NavigatorOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of repositories selected for enrichment
pub const SELECT_LIMIT: usize = 5;
