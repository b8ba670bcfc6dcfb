//! Database Error Types
//!
//! This module defines error types for opening and initializing the category
//! store. Per-operation failures are reported through `anyhow::Result` by the
//! [`CategoryStore`](super::CategoryStore) trait.

use std::path::PathBuf;
use thiserror::Error;

/// Database setup errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open the embedded database
    #[error("Failed to connect to database at {}: {source}", .path.display())]
    ConnectionFailed {
        path: PathBuf,
        source: surrealdb::Error,
    },

    /// Failed to select namespace/database or define tables
    #[error("Failed to initialize database schema: {0}")]
    InitializationFailed(String),

    /// Failed to create parent directory
    #[error("Failed to create parent directory for database: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),

    /// SurrealDB operation error
    #[error("Database operation failed: {0}")]
    SurrealError(#[from] surrealdb::Error),
}

impl DatabaseError {
    /// Create a connection failed error
    pub fn connection_failed(path: PathBuf, source: surrealdb::Error) -> Self {
        Self::ConnectionFailed { path, source }
    }

    /// Create an initialization failed error
    pub fn initialization_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }
}
