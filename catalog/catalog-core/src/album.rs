//! Album - The Catalog Record
//!
//! TigerStyle: closed field set, exhaustive dispatch, one rendering rule.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::constants::PRICE_DECIMALS_COUNT;

// =============================================================================
// Album Field
// =============================================================================

/// Fields an album can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumField {
    /// Catalog identifier (the sort key)
    Id,
    /// Album title
    Title,
    /// Performing artist
    Artist,
    /// Price, rendered with two decimals
    Price,
}

impl AlbumField {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Price => "price",
        }
    }

    /// Parse from string, ignoring case. Unknown names yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "artist" => Some(Self::Artist),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    /// Get all fields in column order.
    #[must_use]
    pub fn all() -> &'static [AlbumField] {
        &[Self::Id, Self::Title, Self::Artist, Self::Price]
    }
}

impl std::fmt::Display for AlbumField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Album
// =============================================================================

/// A single catalog record.
///
/// No invariants are enforced on construction: ids may repeat, titles may be
/// empty and prices may be negative. Fields missing from a JSON body take
/// their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Catalog identifier
    pub id: String,
    /// Album title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Price in the catalog currency
    pub price: f64,
}

impl Album {
    /// Create an album from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Render a field as the string used for lookup and display.
    #[must_use]
    pub fn field(&self, field: AlbumField) -> String {
        self.field_key(field).into_owned()
    }

    /// Like [`Album::field`], borrowing text fields. Only price allocates.
    #[must_use]
    pub fn field_key(&self, field: AlbumField) -> Cow<'_, str> {
        match field {
            AlbumField::Id => Cow::Borrowed(self.id.as_str()),
            AlbumField::Title => Cow::Borrowed(self.title.as_str()),
            AlbumField::Artist => Cow::Borrowed(self.artist.as_str()),
            AlbumField::Price => Cow::Owned(format_price(self.price)),
        }
    }

    /// Render a field named by a string. Unknown names yield `None`.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<String> {
        AlbumField::parse(name).map(|field| self.field(field))
    }
}

/// Format a price with exactly two fractional digits.
///
/// Rounds to nearest from the exact binary value, so `56.999` renders as
/// `57.00` and `17.9` as `17.90`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{:.*}", PRICE_DECIMALS_COUNT, price)
}

// =============================================================================
// Tests
// =============================================================================
