//! Category Tree HTTP Server
//!
//! REST API over [`CategoryService`]:
//!
//! - `category_endpoints`: health check and category CRUD + tree
//! - `http_error`: uniform `{ success: false, message, code }` error bodies
//! - `config`: environment-driven [`ServerConfig`]
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin category-server
//!
//! # Custom port, throwaway database
//! CATEGORY_SERVER_PORT=3002 CATEGORY_DB_PATH=memory cargo run --bin category-server
//! ```

use axum::{
    http::{header, Method},
    Router,
};
use category_tree_core::db::{CategoryStore, SurrealStore};
use category_tree_core::services::CategoryService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod category_endpoints;
pub mod config;
mod http_error;

pub use config::{ConfigError, DatabaseLocation, ServerConfig};
pub use http_error::HttpError;

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
}

impl AppState {
    pub fn new(category_service: CategoryService) -> Self {
        Self {
            category_service: Arc::new(category_service),
        }
    }
}

/// Create the application router
///
/// Unmatched paths fall through to a JSON 404.
pub fn create_router(state: AppState, cors_origins: &[header::HeaderValue]) -> Router {
    Router::new()
        .merge(category_endpoints::routes(state))
        .fallback(route_not_found)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> HttpError {
    HttpError::route_not_found()
}

/// CORS layer; an empty origin list allows any origin
fn cors_layer(origins: &[header::HeaderValue]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_credentials(false);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins.to_vec())
    }
}

/// Open the record store described by `location`
pub async fn open_store(location: &DatabaseLocation) -> anyhow::Result<Arc<dyn CategoryStore>> {
    let store: Arc<dyn CategoryStore> = match location {
        DatabaseLocation::Disk(path) => Arc::new(SurrealStore::new(path.clone()).await?),
        DatabaseLocation::Memory => Arc::new(SurrealStore::new_in_memory().await?),
    };
    Ok(store)
}

/// Start the HTTP server and serve until the process exits
///
/// # Errors
///
/// Returns error if the store cannot be opened or the address cannot be bound.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config.database).await?;
    let state = AppState::new(CategoryService::new(store));
    let app = create_router(state, &config.cors_origins);

    let addr = config.bind_addr();
    tracing::info!("HTTP server listening on http://{}", addr);
    if config.cors_origins.is_empty() {
        tracing::info!("CORS enabled for any origin");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
