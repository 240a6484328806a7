//! Site settings command line entry point
//!
//! # Usage
//!
//! ```bash
//! site-settings check
//! site-settings show --format json
//! site-settings diagnose
//! site-settings serve --port 8000 --host 0.0.0.0
//! ```

use clap::Parser;
use site_settings::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::run(cli).await
}
