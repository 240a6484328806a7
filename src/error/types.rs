//! Error type definitions
//!
//! Defines the error types produced while loading and validating settings.

use thiserror::Error;

/// Main error type for settings loading
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is unset or empty
    #[error("Missing required environment variable: {name}")]
    MissingVar { name: String },

    /// An environment variable is present but its value is unusable
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: String, reason: String },

    /// The database connection URL could not be parsed
    #[error("Invalid database URL in {name}: {reason}")]
    InvalidDatabaseUrl { name: String, reason: String },

    /// The connection URL names a scheme with no known backend
    #[error("Unknown database scheme: {scheme}")]
    UnknownScheme { scheme: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),


    /// .env file errors
    #[error("Dotenv error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML render errors
    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a missing-variable error
    pub fn missing_var(name: impl Into<String>) -> Self {
        Self::MissingVar { name: name.into() }
    }

    /// Create an invalid-variable error
    pub fn invalid_var(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVar {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid database URL error
    pub fn invalid_database_url(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDatabaseUrl {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown scheme error
    pub fn unknown_scheme(scheme: impl Into<String>) -> Self {
        Self::UnknownScheme {
            scheme: scheme.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Name of the environment variable this error is about, if any
    pub fn var_name(&self) -> Option<&str> {
        match self {
            Self::MissingVar { name }
            | Self::InvalidVar { name, .. }
            | Self::InvalidDatabaseUrl { name, .. } => Some(name),
            _ => None,
        }
    }
}
