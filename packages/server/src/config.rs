//! Runtime configuration from environment variables
//!
//! - `CATEGORY_SERVER_HOST`: bind address (default: 127.0.0.1)
//! - `CATEGORY_SERVER_PORT`: port (default: 3001)
//! - `CATEGORY_DB_PATH`: RocksDB directory, or `memory` for the in-memory engine
//!   (default: ~/.category-tree/database/categories.db)
//! - `CORS_ALLOW_ORIGIN`: comma-separated allowed origins (default: any)

use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;

/// Invalid configuration value
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to determine home directory for the default database path")]
    NoHomeDirectory,
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Where the category store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// RocksDB directory on disk
    Disk(PathBuf),
    /// Non-persistent in-memory engine
    Memory,
}

/// Server configuration, built once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseLocation,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("CATEGORY_SERVER_HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::invalid("CATEGORY_SERVER_HOST", &value, e))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("CATEGORY_SERVER_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("CATEGORY_SERVER_PORT", &value, e))?,
            None => DEFAULT_PORT,
        };

        let database = match lookup("CATEGORY_DB_PATH") {
            Some(value) if value.eq_ignore_ascii_case("memory") => DatabaseLocation::Memory,
            Some(value) => DatabaseLocation::Disk(PathBuf::from(value)),
            None => DatabaseLocation::Disk(default_db_path()?),
        };

        let cors_origins = match lookup("CORS_ALLOW_ORIGIN") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|e| ConfigError::invalid("CORS_ALLOW_ORIGIN", origin, e))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            host,
            port,
            database,
            cors_origins,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Default: ~/.category-tree/database/categories.db
fn default_db_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;

    Ok(home_dir
        .join(".category-tree")
        .join("database")
        .join("categories.db"))
}
