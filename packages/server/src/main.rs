//! Category Tree HTTP Server Binary
//!
//! # Environment Variables
//!
//! - `CATEGORY_SERVER_HOST`: Bind address (default: 127.0.0.1)
//! - `CATEGORY_SERVER_PORT`: Server port (default: 3001)
//! - `CATEGORY_DB_PATH`: Database directory, or `memory` (default: ~/.category-tree/database/categories.db)
//! - `CORS_ALLOW_ORIGIN`: Comma-separated allowed origins (default: any)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use category_tree_server::{DatabaseLocation, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!("Category Tree Server");
    match &config.database {
        DatabaseLocation::Disk(path) => tracing::info!("Database: {}", path.display()),
        DatabaseLocation::Memory => tracing::warn!("Database: in-memory, data is lost on exit"),
    }

    category_tree_server::start_server(config).await
}
