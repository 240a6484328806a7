//! Configuration management for the web application
//!
//! This module reads the process environment (optionally seeded from a
//! `.env` file and a TOML settings file) and produces the settings handed
//! to the web runtime.

pub mod database;
pub mod defaults;
pub mod diagnostics;
pub mod env;
pub mod hosts;
pub mod loader;
pub mod settings;

pub use database::{DatabaseEngine, DatabaseOrigin, DatabaseSettings};
pub use diagnostics::DatabaseReport;
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use hosts::AllowedHosts;
pub use loader::ConfigLoader;
pub use settings::{OutputFormat, SecretKey, Settings};

/// Placeholder shown instead of secrets
pub const REDACTED: &str = "[REDACTED]";
