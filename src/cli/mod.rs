//! Command line interface
//!
//! Parses arguments, sets up logging and dispatches to the subcommands.

pub mod server;
pub mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{OutputFormat, loader::DEFAULT_DOTENV_FILE};

/// Environment-driven settings for the community web application
#[derive(Debug, Parser)]
#[command(name = "site-settings", author, version, about, long_about = None)]
pub struct Cli {
    /// TOML settings file, overridden by environment variables
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// .env file loaded before reading the environment
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_DOTENV_FILE)]
    pub env_file: PathBuf,

    /// Do not load any .env file
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and validate the settings, failing on the first problem
    Check,

    /// Print the resolved settings with secrets redacted
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Report which database variables are set
    Diagnose,

    /// Serve the health endpoint behind the allowed-host guard
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

impl Cli {
    /// The .env file to load, if any
    pub fn dotenv_file(&self) -> Option<PathBuf> {
        (!self.no_env_file).then(|| self.env_file.clone())
    }
}

/// Initialize logging on stderr, keeping stdout for command output
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let dotenv_file = cli.dotenv_file();
    let config = cli.config.as_deref();

    match cli.command {
        Command::Check => settings::run_check(config, dotenv_file),
        Command::Show { format } => settings::run_show(config, dotenv_file, format),
        Command::Diagnose => settings::run_diagnose(dotenv_file),
        Command::Serve { port, host } => {
            let args = server::ServerArgs {
                port,
                host,
                config: config.map(PathBuf::from),
                dotenv_file,
            };
            server::run_server_mode(args).await
        }
    }
}
