//! Category Tree Core Business Logic Layer
//!
//! This crate provides the data model, record store and hierarchy maintenance
//! for a category tree where every category knows its parent, its
//! materialized path and its depth.
//!
//! # Architecture
//!
//! - **Flat storage**: categories live in one collection keyed by ID; the tree is never persisted
//! - **Derived fields**: `path` and `level` are recomputed from the parent on every write
//! - **Explicit cascades**: subtree deletion and path refreshes are driven by the service
//! - **SurrealDB**: embedded RocksDB engine on disk, in-memory engine for tests
//!
//! # Modules
//!
//! - [`models`] - Data structures (Category, CategoryTree)
//! - [`db`] - Record store trait and SurrealDB implementation
//! - [`hierarchy`] - Path/level computation, cascades and tree reconstruction
//! - [`services`] - Business services (CategoryService)

pub mod db;
pub mod hierarchy;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::{CategoryStore, DatabaseError, SurrealStore};
pub use models::*;
pub use services::*;
