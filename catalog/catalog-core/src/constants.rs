//! TigerStyle Constants
//!
//! Shared limits and defaults. Names carry their unit as a suffix.

/// Fractional digits used when rendering a price as a string
pub const PRICE_DECIMALS_COUNT: usize = 2;

/// Number of albums the catalog is seeded with at startup
pub const SEED_ALBUMS_COUNT: usize = 3;

/// Message returned when an album lookup misses
pub const ALBUM_NOT_FOUND_MESSAGE: &str = "album not found";

/// Message returned when the Authorization header does not match
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid Authorization header";

/// Collection path served by the HTTP boundary
pub const ALBUMS_PATH: &str = "/albums";

/// Single-album path served by the HTTP boundary
pub const ALBUM_BY_ID_PATH: &str = "/albums/:id";
