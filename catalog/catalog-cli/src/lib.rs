//! Catalog CLI
//!
//! Client side of the album catalog: configuration, HTTP calls, random
//! album generation and output rendering. The `albums` binary wires these
//! into `list` and `new` subcommands.

pub mod client;
pub mod config;
pub mod generate;
pub mod output;

pub use client::{AlbumClient, ClientError};
pub use config::ClientConfig;
pub use generate::random_album;
pub use output::{render_albums, render_csv, render_json, OutputFormat};
