//! HTTP server guarded by the allowed hosts
//!
//! A health endpoint that only answers for the configured hostnames.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app};
