//! Errors and the JSON error body shared by server and client.

use serde::{Deserialize, Serialize};

use crate::album::AlbumField;
use crate::constants::ALBUM_NOT_FOUND_MESSAGE;

/// Catalog lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No album matched. An unrecognized field name also lands here.
    #[error("album not found: {field} = {value:?}")]
    NotFound {
        /// Field name as requested
        field: String,
        /// Value searched for
        value: String,
    },
}

impl CatalogError {
    /// Not-found error for a typed field.
    #[must_use]
    pub fn not_found(field: AlbumField, value: &str) -> Self {
        Self::NotFound {
            field: field.as_str().to_string(),
            value: value.to_string(),
        }
    }
}

/// `{"error": "..."}` body returned on any non-success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable reason
    pub error: String,
}

impl ErrorMessage {
    /// Create an error body.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&CatalogError> for ErrorMessage {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => Self::new(ALBUM_NOT_FOUND_MESSAGE),
        }
    }
}
