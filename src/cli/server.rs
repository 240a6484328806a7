//! Server mode CLI logic
//!
//! Contains the core logic for running the allowed-host guarded server.

use crate::{config::ConfigLoader, server::app, utils::version};
use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use tokio::net::TcpListener;

/// Arguments for server mode
#[derive(Debug)]
pub struct ServerArgs {
    pub port: u16,
    pub host: String,
    pub config: Option<PathBuf>,
    pub dotenv_file: Option<PathBuf>,
}

/// Run server mode with the given arguments
pub async fn run_server_mode(args: ServerArgs) -> Result<()> {
    // Fail fast: never serve with incomplete settings
    let settings = ConfigLoader::new()
        .with_dotenv(args.dotenv_file.clone())
        .load(args.config.as_deref())
        .context("Settings are invalid")?;

    tracing::info!("Starting settings server v{}", version::get_version());
    tracing::info!(
        "Accepting hosts: {}",
        settings.allowed_hosts.as_slice().join(", ")
    );

    let app = app::create_app(settings);

    let listener = bind_listener(&args.host, args.port).await?;

    tracing::info!(
        "Settings server v{} listening on {}",
        version::get_version(),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Resolve `host` and bind the listener the server will accept on.
///
/// `::` tries IPv6 first and falls back to `0.0.0.0`. The listener that
/// bound successfully is returned as-is, so the port stays held.
pub async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    let ip = match host {
        "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
        _ => host.parse::<IpAddr>().map_err(|_| {
            anyhow::anyhow!(
                "Invalid host address: {}. Use an IP address, 'localhost' or '::'",
                host
            )
        })?,
    };
    let addr = SocketAddr::new(ip, port);

    if ip != IpAddr::V6(Ipv6Addr::UNSPECIFIED) {
        tracing::debug!("Binding {}", addr);
        return TcpListener::bind(addr)
            .await
            .with_context(|| format!("Could not listen on {}", addr));
    }

    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            tracing::warn!(
                "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                port,
                e
            );
            let fallback = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("Could not listen on {}", fallback))
        }
    }
}
