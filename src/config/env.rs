//! Environment variable sources
//!
//! Settings are read through [`EnvSource`] so the same loading code runs
//! against the process environment or an in-memory map.

use crate::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// A read-only view of environment variables
pub trait EnvSource {
    /// Look up a single variable
    fn var(&self, key: &str) -> Option<String>;

    /// All variables, in a stable order
    fn vars(&self) -> Vec<(String, String)>;

    /// Look up a variable, treating an empty value as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        let mut vars: Vec<_> = std::env::vars().collect();
        vars.sort();
        vars
    }
}

/// An in-memory set of variables
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Load a `.env` file into the process environment.
///
/// Variables already set in the environment are not overwritten. A missing
/// file is not an error; returns whether a file was loaded.
pub fn load_dotenv(path: &Path) -> Result<bool> {
    if !path.exists() {
        debug!("No .env file at {:?}", path);
        return Ok(false);
    }

    dotenvy::from_path(path)?;
    info!("Loaded environment from {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("SECRET_KEY", "abc").with("DEBUG", "");

        assert_eq!(env.var("SECRET_KEY").as_deref(), Some("abc"));
        assert_eq!(env.var("DEBUG").as_deref(), Some(""));
        assert_eq!(env.non_empty("DEBUG"), None);
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    fn test_map_env_vars_sorted() {
        let env: MapEnv = [("DB_USER", "u"), ("ALLOWED_HOSTS", "a"), ("DB_HOST", "h")]
            .into_iter()
            .collect();

        let keys: Vec<_> = env.vars().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ALLOWED_HOSTS", "DB_HOST", "DB_USER"]);
    }

    #[test]
    fn test_load_dotenv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_dotenv(&dir.path().join(".env")).unwrap();
        assert!(!loaded);
    }
}
