//! Configuration settings structure
//!
//! Defines the settings handed to the web runtime and the logic that builds
//! them from environment variables or a settings file.

use super::database::DatabaseSettings;
use super::defaults::{self, DEBUG_TRUE_LITERAL, to_owned_list};
use super::env::{EnvSource, ProcessEnv};
use super::hosts::AllowedHosts;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main settings object, built once at process start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cryptographic signing key
    pub secret_key: SecretKey,
    /// Debug mode
    pub debug: bool,
    /// Hostnames the server answers for
    pub allowed_hosts: AllowedHosts,
    /// Application modules, in load order
    pub installed_apps: Vec<String>,
    /// Middleware, in request order
    pub middleware: Vec<String>,
    /// Root URL configuration module
    pub root_urlconf: String,
    /// Application entry point for the web server gateway
    pub wsgi_application: String,
    /// Password validators, in evaluation order
    pub password_validators: Vec<String>,
    /// URL prefix for static files
    pub static_url: String,
    /// Primary key field type for models without an explicit one
    pub default_auto_field: String,
    // Table-valued fields stay last so TOML output keeps plain keys first
    /// Template engines
    pub templates: Vec<TemplateSettings>,
    /// Default database connection
    pub database: DatabaseSettings,
    /// Internationalization
    pub i18n: I18nSettings,
}

/// Signing key that never shows up in logs
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(super::REDACTED)
    }
}

/// Template engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Engine backend descriptor
    pub backend: String,
    /// Extra template directories
    pub dirs: Vec<PathBuf>,
    /// Look for templates inside installed apps
    pub app_dirs: bool,
    /// Context processors, in order
    pub context_processors: Vec<String>,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            backend: defaults::TEMPLATE_BACKEND.to_string(),
            dirs: Vec::new(),
            app_dirs: true,
            context_processors: to_owned_list(defaults::TEMPLATE_CONTEXT_PROCESSORS),
        }
    }
}

/// Internationalization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            language_code: defaults::LANGUAGE_CODE.to_string(),
            time_zone: defaults::TIME_ZONE.to_string(),
            use_i18n: defaults::USE_I18N,
            use_tz: defaults::USE_TZ,
        }
    }
}

/// Rendering format for resolved settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secret_key: SecretKey::default(),
            debug: false,
            allowed_hosts: AllowedHosts::default(),
            installed_apps: to_owned_list(defaults::INSTALLED_APPS),
            middleware: to_owned_list(defaults::MIDDLEWARE),
            root_urlconf: defaults::ROOT_URLCONF.to_string(),
            wsgi_application: defaults::WSGI_APPLICATION.to_string(),
            password_validators: to_owned_list(defaults::PASSWORD_VALIDATORS),
            static_url: defaults::STATIC_URL.to_string(),
            default_auto_field: defaults::DEFAULT_AUTO_FIELD.to_string(),
            templates: vec![TemplateSettings::default()],
            database: DatabaseSettings::default(),
            i18n: I18nSettings::default(),
        }
    }
}

/// `DEBUG` is on only for the exact literal `True`
pub fn parse_debug(raw: Option<&str>) -> bool {
    raw == Some(DEBUG_TRUE_LITERAL)
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load settings from an environment source.
    ///
    /// Fails with [`Error::MissingVar`] naming the variable when a required
    /// one is absent.
    pub fn from_source(source: &impl EnvSource) -> Result<Self> {
        let secret_key = source
            .non_empty(defaults::ENV_SECRET_KEY)
            .ok_or_else(|| Error::missing_var(defaults::ENV_SECRET_KEY))?;

        let debug = parse_debug(source.var(defaults::ENV_DEBUG).as_deref());
        let allowed_hosts =
            AllowedHosts::parse(source.var(defaults::ENV_ALLOWED_HOSTS).as_deref());
        let database = DatabaseSettings::from_source(source)?;

        Ok(Self {
            secret_key: SecretKey::new(secret_key),
            debug,
            allowed_hosts,
            database,
            ..Self::default()
        })
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Override with whichever variables the environment defines
    pub fn merge_with_env(mut self, source: &impl EnvSource) -> Result<Self> {
        if let Some(key) = source.non_empty(defaults::ENV_SECRET_KEY) {
            self.secret_key = SecretKey::new(key);
        }

        if let Some(raw) = source.var(defaults::ENV_DEBUG) {
            self.debug = parse_debug(Some(&raw));
        }

        if let Some(raw) = source.var(defaults::ENV_ALLOWED_HOSTS) {
            self.allowed_hosts = AllowedHosts::parse(Some(&raw));
        }

        match source.non_empty(defaults::ENV_DATABASE_URL) {
            Some(url) => {
                debug!("Replacing file database settings from {}", defaults::ENV_DATABASE_URL);
                self.database =
                    DatabaseSettings::from_url(&url, defaults::URL_CONN_MAX_AGE_SECS)?;
            }
            None => self.database.apply_discrete_overrides(source)?,
        }

        Ok(self)
    }

    /// Validate the resolved settings
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            return Err(Error::missing_var(defaults::ENV_SECRET_KEY));
        }

        if self.allowed_hosts.is_empty() {
            return Err(Error::invalid_var(
                defaults::ENV_ALLOWED_HOSTS,
                "no hosts configured",
            ));
        }
        if let Some(host) = self
            .allowed_hosts
            .as_slice()
            .iter()
            .find(|h| h.chars().any(char::is_whitespace))
        {
            return Err(Error::invalid_var(
                defaults::ENV_ALLOWED_HOSTS,
                format!("host {:?} contains whitespace", host),
            ));
        }

        ensure_unique("installed_apps", &self.installed_apps)?;
        ensure_unique("middleware", &self.middleware)?;

        if !self.static_url.ends_with('/') {
            return Err(Error::config(format!(
                "static_url must end with '/', got {:?}",
                self.static_url
            )));
        }

        self.database.validate()?;

        if self.debug {
            warn!("Debug mode is enabled; do not run this configuration in production");
        }

        Ok(())
    }

    /// Copy with secrets replaced, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.secret_key.is_empty() {
            copy.secret_key = SecretKey::new(super::REDACTED);
        }
        copy.database = self.database.redacted();
        copy
    }

    /// Render the settings with secrets redacted
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let redacted = self.redacted();
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&redacted)?,
            OutputFormat::Toml => toml::to_string_pretty(&redacted)?,
        };
        Ok(rendered)
    }
}

fn ensure_unique(field: &str, items: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.as_str()) {
            return Err(Error::config(format!(
                "{} lists {:?} more than once",
                field, item
            )));
        }
    }
    Ok(())
}
