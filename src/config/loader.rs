//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use super::diagnostics::DatabaseReport;
use super::env::{EnvSource, ProcessEnv, load_dotenv};
use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default `.env` location, relative to the working directory
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// `.env` file loaded before reading the environment
    dotenv_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            dotenv_file: Some(PathBuf::from(DEFAULT_DOTENV_FILE)),
        }
    }

    /// Use a different `.env` file, or none at all
    pub fn with_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.dotenv_file = path;
        self
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables (including the `.env` file)
    /// 2. Configuration file
    /// 3. Default values (lowest priority)
    ///
    /// Command line flags are applied on top by the caller.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        self.load_dotenv()?;
        self.load_from(config_file, &ProcessEnv)
    }

    /// Same as [`ConfigLoader::load`], reading variables from `source`
    pub fn load_from(
        &self,
        config_file: Option<&Path>,
        source: &impl EnvSource,
    ) -> Result<Settings> {
        DatabaseReport::collect(source).log();

        let settings = match config_file {
            Some(path) if path.exists() => {
                info!("Loading configuration from file: {:?}", path);
                let file_settings = Settings::from_file(path)?;

                // Override with environment variables
                debug!("Applying environment variable overrides");
                file_settings.merge_with_env(source)?
            }
            Some(path) => {
                warn!("Configuration file not found: {:?}, using environment", path);
                Settings::from_source(source)?
            }
            None => Settings::from_source(source)?,
        };

        // Validate final configuration
        settings.validate()?;

        info!("Configuration loaded successfully");
        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Load configuration from the `.env` file and environment only
    pub fn from_env_only(&self) -> Result<Settings> {
        self.load(None)
    }

    fn load_dotenv(&self) -> Result<()> {
        if let Some(path) = &self.dotenv_file {
            load_dotenv(path)?;
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::config::env::MapEnv;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env() -> MapEnv {
        MapEnv::new()
            .with("SECRET_KEY", "loader-secret")
            .with("DATABASE_URL", "postgres://app:pw@db:5432/community")
    }

    #[test]
    fn test_load_from_env() {
        let loader = ConfigLoader::new();
        let settings = loader.load_from(None, &env()).unwrap();

        assert_eq!(settings.database.host, "db");
        assert_eq!(settings.database.conn_max_age, 600);
        assert_eq!(settings.static_url, "static/");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
secret_key = "file-secret"
allowed_hosts = ["files.example"]
static_url = "/assets/"

[database]
engine = "django.db.backends.sqlite3"
name = "/var/data/site.sqlite3"
host = ""

[i18n]
time_zone = "Asia/Seoul"
        "#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader
            .load_from(Some(temp_file.path()), &MapEnv::new())
            .unwrap();

        assert_eq!(settings.secret_key.expose(), "file-secret");
        assert_eq!(settings.allowed_hosts.as_slice(), ["files.example"]);
        assert_eq!(settings.static_url, "/assets/");
        assert_eq!(settings.database.name, "/var/data/site.sqlite3");
        assert_eq!(settings.i18n.time_zone, "Asia/Seoul");
        assert_eq!(settings.i18n.language_code, "en-us");
    }

    #[test]
    fn test_env_var_override() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
secret_key = "file-secret"
debug = false
        "#
        )
        .unwrap();

        let source = env().with("DEBUG", "True");
        let loader = ConfigLoader::new();
        let settings = loader.load_from(Some(temp_file.path()), &source).unwrap();

        assert!(settings.debug);
        assert_eq!(settings.secret_key.expose(), "loader-secret");
        assert_eq!(settings.database.name, "community");
    }

    #[test]
    fn test_missing_file_falls_back_to_env() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new();
        let settings = loader
            .load_from(Some(dir.path().join("missing.toml").as_path()), &env())
            .unwrap();

        assert_eq!(settings.secret_key.expose(), "loader-secret");
    }

    #[test]
    fn test_fail_fast_on_missing_secret() {
        let source = MapEnv::new().with("DATABASE_URL", "postgres://app:pw@db/community");
        let err = ConfigLoader::new().load_from(None, &source).unwrap_err();

        assert!(matches!(err, Error::MissingVar { ref name } if name == "SECRET_KEY"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "debug = = true").unwrap();

        let err = ConfigLoader::new()
            .load_from(Some(temp_file.path()), &env())
            .unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_env_only_matches_direct_resolution() {
        let source = env().with("ALLOWED_HOSTS", "site.example").with("DEBUG", "True");
        let loaded = ConfigLoader::new()
            .with_dotenv(None)
            .load_from(None, &source)
            .unwrap();

        assert_eq!(loaded, Settings::from_source(&source).unwrap());
        assert_eq!(loaded.allowed_hosts.as_slice(), ["site.example"]);
        assert!(loaded.debug);
    }

    #[test]
    fn test_env_only_validates() {
        let source = MapEnv::new()
            .with("SECRET_KEY", "loader-secret")
            .with("DATABASE_URL", "postgres://app:pw@db:5432");
        let err = ConfigLoader::new().load_from(None, &source).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }
}
