//! Random Albums
//!
//! Made-up albums for `albums new`.

use catalog_core::Album;
use rand::seq::SliceRandom;
use rand::Rng;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Smallest generated id (the seed set uses 1..=3)
pub const GENERATED_ID_MIN: u32 = 3;

/// Largest generated id
pub const GENERATED_ID_MAX: u32 = 999_999;

/// Lowest generated price
pub const GENERATED_PRICE_MIN: f64 = 5.0;

/// Highest generated price
pub const GENERATED_PRICE_MAX: f64 = 60.0;

const TITLE_ADJECTIVES: &[&str] = &[
    "Blue", "Midnight", "Electric", "Quiet", "Golden", "Velvet", "Smoky", "Lunar",
];

const TITLE_NOUNS: &[&str] = &[
    "Train", "Sessions", "Groove", "Horizon", "Standards", "Ballads", "Suite", "Avenue",
];

const FIRST_NAMES: &[&str] = &[
    "Ella", "Miles", "Nina", "Thelonious", "Billie", "Chet", "Sonny", "Alice",
];

const LAST_NAMES: &[&str] = &[
    "Harper", "Monroe", "Whitaker", "Castillo", "Okafor", "Lindqvist", "Brennan", "Sato",
];

/// Generate a random album.
///
/// The id is a decimal integer in `GENERATED_ID_MIN..=GENERATED_ID_MAX`; the
/// price lies in `[GENERATED_PRICE_MIN, GENERATED_PRICE_MAX]`, rounded to cents.
pub fn random_album<R: Rng>(rng: &mut R) -> Album {
    let id = rng.gen_range(GENERATED_ID_MIN..=GENERATED_ID_MAX).to_string();
    let title = format!("{} {}", pick(rng, TITLE_ADJECTIVES), pick(rng, TITLE_NOUNS));
    let artist = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
    let price = round_cents(rng.gen_range(GENERATED_PRICE_MIN..=GENERATED_PRICE_MAX));

    Album::new(id, title, artist, price)
}

fn pick<R: Rng>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

// =============================================================================
// Tests
// =============================================================================
