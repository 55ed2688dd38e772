//! Server Configuration
//!
//! TigerStyle: explicit precedence. Command-line flag, then environment
//! (including anything loaded from a dotenv file), then default.

use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Default HTTP bind address
pub const BIND_ADDRESS_DEFAULT: &str = "127.0.0.1:8080";

/// Environment variable overriding the bind address
pub const BIND_ADDRESS_ENV: &str = "ALBUMD_BIND";

/// Environment variable holding the Authorization secret
pub const SECRET_KEY_ENV: &str = "SERVER_SECRET_KEY";

// =============================================================================
// Config
// =============================================================================

/// Resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind: SocketAddr,
    /// Value every request must carry in its `Authorization` header
    pub secret_key: String,
}

impl ServerConfig {
    /// Resolve settings from flags, falling back to `lookup` (the environment
    /// in production) and then to defaults.
    pub fn resolve<F>(
        bind_flag: Option<String>,
        secret_key_flag: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = bind_flag
            .or_else(|| lookup(BIND_ADDRESS_ENV))
            .unwrap_or_else(|| BIND_ADDRESS_DEFAULT.to_string());
        let bind = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(bind_raw.clone()))?;

        let secret_key = secret_key_flag
            .or_else(|| lookup(SECRET_KEY_ENV))
            .ok_or(ConfigError::MissingSecretKey)?;
        if secret_key.trim().is_empty() {
            return Err(ConfigError::MissingSecretKey);
        }

        Ok(Self { bind, secret_key })
    }
}

/// Load dotenv settings into the process environment.
///
/// An explicit path must exist; without one, `.env` in the working directory
/// is loaded if present. Variables already set are not overwritten.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.display().to_string(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Loaded env file");
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!(path = %path.display(), "Loaded env file");
            }
        }
    }
    Ok(())
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("secret key missing: pass --secret-key or set SERVER_SECRET_KEY")]
    MissingSecretKey,

    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_with_secret_from_env() {
        let vars = env(&[(SECRET_KEY_ENV, "MAGICSTRING")]);
        let config = ServerConfig::resolve(None, None, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.bind, BIND_ADDRESS_DEFAULT.parse::<std::net::SocketAddr>().unwrap());
        assert_eq!(config.secret_key, "MAGICSTRING");
    }

    #[test]
    fn test_flags_beat_env() {
        let vars = env(&[(BIND_ADDRESS_ENV, "0.0.0.0:9000"), (SECRET_KEY_ENV, "from-env")]);
        let config = ServerConfig::resolve(
            Some("127.0.0.1:7000".to_string()),
            Some("from-flag".to_string()),
            |k| vars.get(k).cloned(),
        )
        .unwrap();

        assert_eq!(config.bind.port(), 7000);
        assert_eq!(config.secret_key, "from-flag");
    }

    #[test]
    fn test_env_bind_used_without_flag() {
        let vars = env(&[(BIND_ADDRESS_ENV, "0.0.0.0:9000"), (SECRET_KEY_ENV, "k")]);
        let config = ServerConfig::resolve(None, None, |k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.bind.port(), 9000);
    }

    #[test]
    fn test_missing_or_blank_secret_rejected() {
        assert!(matches!(
            ServerConfig::resolve(None, None, |_| None),
            Err(ConfigError::MissingSecretKey)
        ));
        assert!(matches!(
            ServerConfig::resolve(None, Some("   ".to_string()), |_| None),
            Err(ConfigError::MissingSecretKey)
        ));
    }

    #[test]
    fn test_bad_bind_rejected() {
        let err = ServerConfig::resolve(Some("localhost".to_string()), Some("k".to_string()), |_| None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress(ref raw) if raw == "localhost"));
    }

    #[test]
    fn test_explicit_env_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("albumd.env");
        assert!(matches!(
            load_env_file(Some(&missing)),
            Err(ConfigError::EnvFile { .. })
        ));

        // A variable name no other test touches.
        let path = dir.path().join("present.env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "ALBUMD_CONFIG_TEST_MARKER=loaded").unwrap();

        load_env_file(Some(&path)).unwrap();
        assert_eq!(
            std::env::var("ALBUMD_CONFIG_TEST_MARKER").as_deref(),
            Ok("loaded")
        );
    }
}
