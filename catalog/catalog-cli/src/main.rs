//! Albums CLI
//!
//! Command-line client for the album catalog server.
//!
//! # Usage
//!
//! ```bash
//! # List albums as indented JSON (default) or CSV
//! albums list
//! albums list --csv
//!
//! # Create a random album
//! albums new
//! ```
//!
//! The server is located through `SERVER_ROOT_URL` and authenticated with
//! `SERVER_SECRET_KEY`; both may come from a `.env` file.

use std::path::PathBuf;

use catalog_cli::{random_album, render_albums, render_json, AlbumClient, ClientConfig, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "albums")]
#[command(about = "Album catalog client", long_about = None)]
#[command(version)]
struct Cli {
    /// Server root URL (overrides SERVER_ROOT_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Authorization secret (overrides SERVER_SECRET_KEY)
    #[arg(long, global = true)]
    secret_key: Option<String>,

    /// Read settings from this dotenv file instead of the environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Enable verbose logging (to stderr)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List albums
    List {
        /// Output in JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,
        /// Output in CSV
        #[arg(long)]
        csv: bool,
    },
    /// Create a random album
    New,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    let config = match &cli.env_file {
        Some(path) => ClientConfig::from_env_file(path)?,
        None => {
            dotenvy::dotenv().ok();
            ClientConfig::from_env()
        }
    }
    .with_overrides(cli.url, cli.secret_key);

    tracing::debug!(root_url = %config.root_url, "Using server");
    let client = AlbumClient::new(config);

    let output = match cli.command {
        Commands::List { json: _, csv } => {
            let format = if csv { OutputFormat::Csv } else { OutputFormat::Json };
            let albums = client.list_albums().await?;
            render_albums(&albums, format)?
        }
        Commands::New => {
            let album = random_album(&mut rand::thread_rng());
            let created = client.create_album(&album).await?;
            render_json(&created)?
        }
    };

    println!("{}", output);
    Ok(())
}
