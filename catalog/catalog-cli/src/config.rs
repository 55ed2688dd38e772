//! Client Configuration
//!
//! Where the server lives and which key to present. Read from the
//! environment (after `.env` is loaded) or straight from a dotenv file.

use std::collections::HashMap;
use std::path::Path;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Server root URL used when nothing is configured
pub const ROOT_URL_DEFAULT: &str = "http://localhost:8080";

/// Environment variable holding the server root URL
pub const ROOT_URL_ENV: &str = "SERVER_ROOT_URL";

/// Environment variable holding the Authorization secret
pub const SECRET_KEY_ENV: &str = "SERVER_SECRET_KEY";

// =============================================================================
// Config
// =============================================================================

/// Connection settings for the catalog server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL without a trailing slash, e.g. `http://localhost:8080`
    pub root_url: String,
    /// Value sent in the `Authorization` header
    pub secret_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: ROOT_URL_DEFAULT.to_string(),
            secret_key: String::new(),
        }
    }
}

impl ClientConfig {
    /// Build from an arbitrary key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup(ROOT_URL_ENV), lookup(SECRET_KEY_ENV))
    }

    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a dotenv file without touching the process environment.
    pub fn from_env_file(path: &Path) -> Result<Self, dotenvy::Error> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self::from_lookup(|key| vars.get(key).cloned()))
    }

    /// Replace settings that were given explicitly.
    #[must_use]
    pub fn with_overrides(mut self, root_url: Option<String>, secret_key: Option<String>) -> Self {
        if let Some(url) = root_url {
            self.root_url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = secret_key {
            self.secret_key = key;
        }
        self
    }

    /// Absolute URL for a server path such as `/albums`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.root_url, path)
    }
}

// =============================================================================
// Tests
// =============================================================================
