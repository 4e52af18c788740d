//! Runtime server configuration
//!
//! Built once at startup from environment variables. `from_lookup` takes
//! any key lookup so tests can supply values without touching the process
//! environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `TRIVIA_HOST` | `127.0.0.1` |
//! | `TRIVIA_PORT` | `5000` |
//! | `TRIVIA_DATABASE` | `~/.trivia/trivia.db` (`memory` for the in-memory store) |
//! | `TRIVIA_CORS_ALLOW_ORIGIN` | any origin |
//! | `TRIVIA_QUIZ_SEED` | unset (entropy) |
//! | `TRIVIA_SEED_CATEGORIES` | `true` |

use axum::http::HeaderValue;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TRIVIA_PORT '{value}': expected a port number")]
    InvalidPort { value: String },

    #[error("Invalid TRIVIA_QUIZ_SEED '{value}': expected an unsigned integer")]
    InvalidSeed { value: String },

    #[error("Invalid TRIVIA_CORS_ALLOW_ORIGIN entry '{value}': must be a valid HTTP origin")]
    InvalidOrigin { value: String },

    #[error("Cannot determine home directory for the default database path")]
    NoHomeDirectory,
}

/// Where questions are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,

    /// Allowed CORS origins; `None` allows any origin
    pub cors_origins: Option<Vec<HeaderValue>>,

    /// Fixed seed for quiz selection, applied per request
    pub quiz_seed: Option<u64>,

    /// Insert the default categories into an empty store
    pub seed_categories: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("TRIVIA_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("TRIVIA_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        let store = match get("TRIVIA_DATABASE") {
            Some(value) if value.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            Some(path) => StoreBackend::File(PathBuf::from(path)),
            None => StoreBackend::File(default_database_path()?),
        };

        let cors_origins = get("TRIVIA_CORS_ALLOW_ORIGIN")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        origin
                            .parse::<HeaderValue>()
                            .map_err(|_| ConfigError::InvalidOrigin {
                                value: origin.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let quiz_seed = get("TRIVIA_QUIZ_SEED")
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { value })
            })
            .transpose()?;

        let seed_categories = !matches!(
            get("TRIVIA_SEED_CATEGORIES").as_deref(),
            Some("0") | Some("false") | Some("no") | Some("off")
        );

        Ok(Self {
            host,
            port,
            store,
            cors_origins,
            quiz_seed,
            seed_categories,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `~/.trivia/trivia.db`
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home_dir.join(".trivia").join("trivia.db"))
}
