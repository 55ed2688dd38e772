//! albumd - Album Catalog Server
//!
//! Serves an in-memory, id-sorted album catalog over HTTP.
//!
//! Features:
//! - List, fetch-by-id and create over `/albums`
//! - Shared-secret `Authorization` header on every route
//! - Catalog seeded with three albums at startup; nothing is persisted

pub mod api;
pub mod config;

use std::path::PathBuf;

use catalog_core::AlbumService;
use clap::Parser;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Application name
pub const APP_NAME: &str = "albumd";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// CLI
// =============================================================================

/// Album catalog HTTP server
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = "In-memory album catalog HTTP server")]
#[command(version)]
struct Cli {
    /// HTTP bind address [env: ALBUMD_BIND] [default: 127.0.0.1:8080]
    #[arg(short, long)]
    bind: Option<String>,

    /// Secret expected in the Authorization header [env: SERVER_SECRET_KEY]
    #[arg(long)]
    secret_key: Option<String>,

    /// Load settings from this dotenv file (default: ./.env if present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    tracing::info!("{} v{}", APP_NAME, APP_VERSION);

    config::load_env_file(cli.env_file.as_deref())?;
    let config = config::ServerConfig::resolve(cli.bind, cli.secret_key, |key| {
        std::env::var(key).ok()
    })?;

    let service = AlbumService::seeded();
    tracing::info!(count = service.len().await, "Seeded catalog");

    let app = api::router(api::AppState::new(service, &config.secret_key));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
