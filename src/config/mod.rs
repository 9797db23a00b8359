//! Configuration module for Reponav-RS
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are passed explicitly into the components that need them.

mod settings;

pub use settings::*;
