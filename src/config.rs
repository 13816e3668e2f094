use anyhow::{Context, Result};
use std::str::FromStr;

/// Which [`crate::store::UrlStore`] implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("unknown STORAGE_BACKEND '{other}' (expected sqlite or memory)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string, e.g. "sqlite:./shrinkr.db"
    pub database_url: String,

    /// Maximum number of pooled SQLite connections
    pub db_max_connections: u32,

    pub storage_backend: StorageBackend,

    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL used when building `full_url`, e.g. "http://localhost:3000".
    /// Never has a trailing slash.
    pub base_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        let db_max_connections = var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".into())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;

        let storage_backend = var("STORAGE_BACKEND")
            .unwrap_or_else(|| "sqlite".into())
            .parse()?;

        let base_url = var("BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite:./shrinkr.db".into()),
            db_max_connections,
            storage_backend,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            base_url,
        })
    }

    /// Public redirect URL for a short code.
    pub fn redirect_url(&self, short_code: &str) -> String {
        format!("{}/redirect/{}", self.base_url, short_code)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./shrinkr.db".into(),
            db_max_connections: 10,
            storage_backend: StorageBackend::Sqlite,
            host: "0.0.0.0".into(),
            port: 3000,
            base_url: "http://localhost:3000".into(),
        }
    }
}
