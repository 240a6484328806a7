//! Settings inspection commands
//!
//! `check`, `show` and `diagnose`.

use crate::config::{
    ConfigLoader, DatabaseReport, OutputFormat, ProcessEnv, Settings, env::load_dotenv,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load and validate, reporting the first problem
pub fn run_check(config: Option<&Path>, dotenv_file: Option<PathBuf>) -> Result<()> {
    let settings = load_settings(config, dotenv_file)?;

    println!(
        "Settings OK: database {} ({}), {} allowed host(s), debug={}",
        settings.database.engine,
        settings.database.name,
        settings.allowed_hosts.as_slice().len(),
        settings.debug
    );
    Ok(())
}

/// Print the resolved settings with secrets redacted
pub fn run_show(
    config: Option<&Path>,
    dotenv_file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let settings = load_settings(config, dotenv_file)?;

    println!("{}", settings.render(format)?);
    Ok(())
}

/// Print the database variable report as JSON
pub fn run_diagnose(dotenv_file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = dotenv_file {
        load_dotenv(&path).with_context(|| format!("Failed to load {}", path.display()))?;
    }

    let report = DatabaseReport::collect(&ProcessEnv);
    report.log();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_settings(config: Option<&Path>, dotenv_file: Option<PathBuf>) -> Result<Settings> {
    let loader = ConfigLoader::new().with_dotenv(dotenv_file);
    let settings = match config {
        Some(path) => loader.load(Some(path)),
        None => loader.from_env_only(),
    };
    settings.context("Settings are invalid")
}
