//! Catalog - Sorted Album Store
//!
//! TigerStyle: the sequence is sorted by id after every insert, checked
//! rather than assumed.
//!
//! Lookup by `id` binary-searches the sequence itself. Every other field has
//! a secondary index: the positions of the sequence ordered by that field's
//! rendered value. Searching the primary sequence by a field it is not
//! sorted on would miss matches, so the indexes are what make
//! `find(Title, ..)` and friends correct.

use std::cmp::Ordering;

use crate::album::{Album, AlbumField};
use crate::constants::SEED_ALBUMS_COUNT;

/// Fields that get a secondary index (everything except the sort key)
const INDEXED_FIELDS: [AlbumField; 3] = [AlbumField::Title, AlbumField::Artist, AlbumField::Price];

// =============================================================================
// Field Index
// =============================================================================

/// Positions into the album sequence, ordered by one field's rendered value.
#[derive(Debug, Clone)]
struct FieldIndex {
    field: AlbumField,
    order: Vec<usize>,
}

impl FieldIndex {
    fn build(field: AlbumField, albums: &[Album]) -> Self {
        let mut order: Vec<usize> = (0..albums.len()).collect();
        order.sort_by_cached_key(|&i| albums[i].field_key(field));
        Self { field, order }
    }

    /// Add the album at `position`, which must be the last one in `albums`.
    fn push(&mut self, albums: &[Album], position: usize) {
        debug_assert_eq!(position + 1, albums.len());
        let key = albums[position].field_key(self.field);
        let at = self
            .order
            .partition_point(|&i| albums[i].field_key(self.field) <= key);
        self.order.insert(at, position);
    }

    fn find(&self, albums: &[Album], value: &str) -> Option<usize> {
        self.order
            .binary_search_by(|&i| {
                let key = albums[i].field_key(self.field);
                (*key).cmp(value)
            })
            .ok()
            .map(|at| self.order[at])
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// In-memory album catalog, sorted by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Albums in ascending id order
    albums: Vec<Album>,
    /// One index per entry of `INDEXED_FIELDS`
    indexes: Vec<FieldIndex>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::from_albums(Vec::new())
    }

    /// Create a catalog holding the startup seed set.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_albums(seed_albums())
    }

    /// Create a catalog from arbitrary albums, sorting them by id.
    #[must_use]
    pub fn from_albums(mut albums: Vec<Album>) -> Self {
        if !is_sorted_by_id(&albums) {
            albums.sort_by(compare_ids);
        }
        let indexes = build_indexes(&albums);
        Self { albums, indexes }
    }

    /// Insert an album and return it unchanged.
    ///
    /// The album is appended; the sequence is re-sorted only when the
    /// append broke id order. Never fails.
    pub fn insert(&mut self, album: Album) -> Album {
        self.albums.push(album.clone());

        if is_sorted_by_id(&self.albums) {
            let position = self.albums.len() - 1;
            for index in &mut self.indexes {
                index.push(&self.albums, position);
            }
        } else {
            self.albums.sort_by(compare_ids);
            self.indexes = build_indexes(&self.albums);
            tracing::trace!(album_id = %album.id, count = self.albums.len(), "Re-sorted catalog");
        }

        debug_assert!(is_sorted_by_id(&self.albums));
        album
    }

    /// Find an album whose rendered `field` equals `value`.
    ///
    /// With duplicate keys any one of the matches is returned.
    #[must_use]
    pub fn find(&self, field: AlbumField, value: &str) -> Option<&Album> {
        let position = match field {
            AlbumField::Id => self
                .albums
                .binary_search_by(|album| album.id.as_str().cmp(value))
                .ok(),
            AlbumField::Title | AlbumField::Artist | AlbumField::Price => self
                .indexes
                .iter()
                .find(|index| index.field == field)
                .and_then(|index| index.find(&self.albums, value)),
        };

        position.map(|i| &self.albums[i])
    }

    /// Find by a field given as a string. Unknown names are a miss.
    #[must_use]
    pub fn find_by_name(&self, field_name: &str, value: &str) -> Option<&Album> {
        let field = AlbumField::parse(field_name)?;
        self.find(field, value)
    }

    /// All albums in id order.
    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Number of albums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Whether the catalog holds no albums.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

/// The three albums every catalog starts with.
#[must_use]
pub fn seed_albums() -> Vec<Album> {
    let albums = vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ];
    debug_assert_eq!(albums.len(), SEED_ALBUMS_COUNT);
    albums
}

fn compare_ids(a: &Album, b: &Album) -> Ordering {
    a.id.cmp(&b.id)
}

fn is_sorted_by_id(albums: &[Album]) -> bool {
    albums.windows(2).all(|pair| pair[0].id <= pair[1].id)
}

fn build_indexes(albums: &[Album]) -> Vec<FieldIndex> {
    INDEXED_FIELDS
        .iter()
        .map(|&field| FieldIndex::build(field, albums))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
