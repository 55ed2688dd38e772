//! Output Rendering
//!
//! Indented JSON or CSV for the `list` command.

use catalog_core::{Album, AlbumField};

/// How `list` prints albums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Render albums in the requested format.
pub fn render_albums(albums: &[Album], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => render_json(albums),
        OutputFormat::Csv => Ok(render_csv(albums)),
    }
}

/// Indented JSON, two-space indent.
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// CSV with an `id,title,artist,price` header; price uses two decimals.
pub fn render_csv(albums: &[Album]) -> String {
    let mut out = String::new();
    push_record(&mut out, AlbumField::all().iter().map(|field| field.as_str().to_string()));

    for album in albums {
        push_record(&mut out, AlbumField::all().iter().map(|&field| album.field(field)));
    }

    out
}

fn push_record(out: &mut String, fields: impl Iterator<Item = String>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_csv_field(&field));
    }
    out.push('\n');
}

/// Quote a field when it holds a separator, quote or line break.
fn escape_csv_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_and_rows() {
        let albums = catalog_core::seed_albums();
        let csv = render_csv(&albums);

        assert_eq!(
            csv,
            "id,title,artist,price\n\
             1,Blue Train,John Coltrane,56.99\n\
             2,Jeru,Gerry Mulligan,17.99\n\
             3,Sarah Vaughan and Clifford Brown,Sarah Vaughan,39.99\n"
        );
    }

    #[test]
    fn test_csv_price_and_quoting() {
        let albums = vec![Album::new("7", "Live, \"Vol. 2\"", "Duo\nTrio", 17.9)];
        let csv = render_csv(&albums);

        assert_eq!(
            csv,
            "id,title,artist,price\n7,\"Live, \"\"Vol. 2\"\"\",\"Duo\nTrio\",17.90\n"
        );
    }

    #[test]
    fn test_csv_empty_catalog_has_header() {
        assert_eq!(render_csv(&[]), "id,title,artist,price\n");
    }

    #[test]
    fn test_json_is_indented() {
        let albums = vec![Album::new("1", "Blue Train", "John Coltrane", 56.99)];
        let json = render_albums(&albums, OutputFormat::Json).unwrap();

        assert!(json.starts_with("[\n  {\n    \"id\": \"1\""));
        let parsed: Vec<Album> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, albums);
    }
}
