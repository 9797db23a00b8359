//! HTTP networking module
//!
//! Provides HTTP client functionality for talking to the GitHub API.

mod client;

pub use client::{ApiResponse, HttpClient};
