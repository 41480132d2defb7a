//! Process configuration, read once at startup and injected into handlers.

use std::env;
use std::path::PathBuf;

use crate::repository::DbContext;

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Default SQLite database file.
pub const DEFAULT_DATABASE: &str = "flags.db";

/// Immutable service settings.
///
/// Constructed once in `cli::run` and passed down; never ambient global
/// state. The API key is optional here so that commands that never serve
/// traffic (`init-db`, `status`) work without one.
#[derive(Debug, Clone)]
pub struct Settings {
    api_key: Option<String>,
    /// SQLite database file holding flagged images.
    pub database_path: PathBuf,
    /// Listening port for `serve`.
    pub port: u16,
}

impl Settings {
    /// Load settings from the environment (`API_KEY`, `FLAGS_DATABASE`, `PORT`).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_parts(
            env::var("API_KEY").ok(),
            env::var("FLAGS_DATABASE").ok(),
            env::var("PORT").ok(),
        )
    }

    fn from_parts(
        api_key: Option<String>,
        database: Option<String>,
        port: Option<String>,
    ) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            database_path: database
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            port,
        })
    }

    /// Override the database file (CLI flag takes precedence over env).
    pub fn with_database(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }

    /// The configured shared secret. Serving traffic without one is a
    /// startup error; an empty string counts as unset.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow::anyhow!("API_KEY is not set in environment variables"))
    }

    /// Create a database context for this configuration.
    pub fn create_db_context(&self) -> DbContext {
        DbContext::new(&self.database_path)
    }
}
