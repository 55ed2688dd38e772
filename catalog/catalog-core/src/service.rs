//! Album Service
//!
//! TigerStyle: the access façade. Translates requests keyed by id into
//! catalog operations and found/not-found outcomes.
//!
//! The catalog is owned through a shared handle. Inserts take the write
//! lock for the whole append/sort/reindex step; lookups take the read lock
//! so a binary search never observes a half-sorted sequence.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::album::{Album, AlbumField};
use crate::error::CatalogError;
use crate::store::Catalog;

/// Thread-safe catalog handle
pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// Create a new shared catalog
pub fn new_shared_catalog(catalog: Catalog) -> SharedCatalog {
    Arc::new(RwLock::new(catalog))
}

/// List / get / create over a shared catalog.
///
/// Cloning is cheap and every clone sees the same catalog.
#[derive(Debug, Clone)]
pub struct AlbumService {
    catalog: SharedCatalog,
}

impl Default for AlbumService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AlbumService {
    /// Wrap an existing catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::from_shared(new_shared_catalog(catalog))
    }

    /// Service over the startup seed set.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    /// Service over a handle shared with other owners.
    #[must_use]
    pub fn from_shared(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// The underlying shared handle.
    #[must_use]
    pub fn shared(&self) -> SharedCatalog {
        Arc::clone(&self.catalog)
    }

    /// Every album, in id order.
    pub async fn list(&self) -> Vec<Album> {
        self.catalog.read().await.albums().to_vec()
    }

    /// Fetch the album with the given id.
    pub async fn get_by_id(&self, id: &str) -> Result<Album, CatalogError> {
        let catalog = self.catalog.read().await;
        catalog
            .find(AlbumField::Id, id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(AlbumField::Id, id))
    }

    /// Fetch an album by a field named at the boundary.
    ///
    /// An unrecognized field name is reported as `NotFound`, same as a miss.
    pub async fn find_by_field(&self, field_name: &str, value: &str) -> Result<Album, CatalogError> {
        let catalog = self.catalog.read().await;
        catalog
            .find_by_name(field_name, value)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                field: field_name.to_string(),
                value: value.to_string(),
            })
    }

    /// Store an album and return it as stored. Always succeeds.
    pub async fn create(&self, album: Album) -> Album {
        let mut catalog = self.catalog.write().await;
        let stored = catalog.insert(album);
        tracing::debug!(album_id = %stored.id, count = catalog.len(), "Stored album");
        stored
    }

    /// Number of albums currently stored.
    pub async fn len(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.catalog.read().await.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_by_id() {
        let service = AlbumService::seeded();

        let album = service.get_by_id("2").await.unwrap();
        assert_eq!(album.title, "Jeru");

        let err = service.get_by_id("99").await.unwrap_err();
        assert_eq!(err, CatalogError::not_found(AlbumField::Id, "99"));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let service = AlbumService::seeded();

        let album = Album::new("10", "Kind of Blue", "Miles Davis", 29.99);
        assert_eq!(service.create(album.clone()).await, album);

        let ids: Vec<String> = service.list().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["1", "10", "2", "3"]);
        assert_eq!(service.get_by_id("10").await.unwrap(), album);
    }

    #[tokio::test]
    async fn test_clones_share_catalog() {
        let service = AlbumService::new(Catalog::new());
        let other = service.clone();
        assert!(other.is_empty().await);

        service.create(Album::new("a", "A", "A", 1.0)).await;

        assert_eq!(other.len().await, 1);
        assert!(Arc::ptr_eq(&service.shared(), &other.shared()));
    }

    #[tokio::test]
    async fn test_find_by_field_unknown_name_is_not_found() {
        let service = AlbumService::seeded();

        let err = service.find_by_field("genre", "Jazz").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { ref field, .. } if field == "genre"));

        let album = service.find_by_field("artist", "John Coltrane").await.unwrap();
        assert_eq!(album.id, "1");
    }
}
