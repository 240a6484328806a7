//! Site Settings
//!
//! Environment-driven settings for the community web application. The
//! settings are read once at process start from environment variables
//! (optionally seeded from a `.env` file and a TOML settings file) and
//! handed to the web runtime as one immutable [`Settings`] value.
//!
//! # Environment
//!
//! - `SECRET_KEY`: required signing key
//! - `DEBUG`: debug mode, on only for the exact value `True`
//! - `ALLOWED_HOSTS`: comma-separated hostnames, `localhost,127.0.0.1` when empty
//! - `DATABASE_URL`: connection URL, or the discrete `DB_NAME`, `DB_USER`,
//!   `DB_PASSWORD`, `DB_HOST` (default `localhost`) and `DB_PORT` (default `5432`)
//!
//! # Usage
//!
//! ```bash
//! site-settings check
//! site-settings show --format toml
//! ```
//!
//! # Examples
//!
//! ```rust
//! use site_settings::{Settings, config::MapEnv};
//!
//! # fn example() -> site_settings::Result<()> {
//! let env = MapEnv::new()
//!     .with("SECRET_KEY", "change-me")
//!     .with("DATABASE_URL", "postgres://app:pw@db.internal:5432/community");
//!
//! let settings = Settings::from_source(&env)?;
//! settings.validate()?;
//! assert_eq!(settings.database.host, "db.internal");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::{ConfigLoader, DatabaseSettings, Settings};
pub use error::{Error, Result};
