//! Database Layer
//!
//! This module holds the record store behind the category hierarchy:
//!
//! - [`CategoryStore`]: the async trait every higher layer depends on
//! - [`SurrealStore`]: embedded SurrealDB implementation (RocksDB or in-memory)
//! - [`DatabaseError`]: failures while opening or initializing a store
//!
//! The store is a flat document collection. It knows nothing about paths,
//! levels or cascades; those rules live in [`crate::hierarchy`].

mod category_store;
mod error;
mod surreal_store;

pub use category_store::CategoryStore;
pub use error::DatabaseError;
pub use surreal_store::SurrealStore;
