//! Catalog Core - Sorted Album Store
//!
//! TigerStyle: one owned catalog, explicit locking, exhaustive field dispatch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            AlbumService (façade)            │
//! │   list / get_by_id / find_by_field / create │
//! ├─────────────────────────────────────────────┤
//! │      Arc<RwLock<Catalog>>  (shared handle)  │
//! ├─────────────────────────────────────────────┤
//! │  Catalog                                    │
//! │    albums: Vec<Album>   sorted by id        │
//! │    indexes: title / artist / price          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use catalog_core::{Album, AlbumService};
//!
//! # tokio_test::block_on(async {
//! let service = AlbumService::seeded();
//! service.create(Album::new("10", "Kind of Blue", "Miles Davis", 29.99)).await;
//!
//! let ids: Vec<String> = service.list().await.into_iter().map(|a| a.id).collect();
//! assert_eq!(ids, ["1", "10", "2", "3"]);
//!
//! let jeru = service.get_by_id("2").await.unwrap();
//! assert_eq!(jeru.title, "Jeru");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod album;
pub mod constants;
pub mod error;
pub mod service;
pub mod store;

pub use album::{format_price, Album, AlbumField};
pub use constants::*;
pub use error::{CatalogError, ErrorMessage};
pub use service::{new_shared_catalog, AlbumService, SharedCatalog};
pub use store::{seed_albums, Catalog};
