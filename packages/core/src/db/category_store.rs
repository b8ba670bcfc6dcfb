//! CategoryStore Trait - Record Store Abstraction
//!
//! This module defines the `CategoryStore` trait that abstracts the flat
//! category collection. The hierarchy engine and `CategoryService` only ever
//! talk to this trait, so the backing database is chosen at wiring time and
//! injected as `Arc<dyn CategoryStore>`.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: All methods are async; every call is a suspension point
//! 2. **Ownership Semantics**: Writes take ownership of the category
//! 3. **Error Handling**: Uses `anyhow::Result` for flexible error context
//! 4. **No Transactions**: Each method is atomic for a single document only
//!
//! # Examples
//!
//! ```rust,no_run
//! use category_tree_core::db::{CategoryStore, SurrealStore};
//! use category_tree_core::models::Category;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store: Arc<dyn CategoryStore> = Arc::new(SurrealStore::new_in_memory().await?);
//!
//!     let category = Category::new("Books".to_string(), None, "/Books".to_string(), 0);
//!     let created = store.insert_category(category).await?;
//!     assert!(store.get_category(&created.id).await?.is_some());
//!
//!     Ok(())
//! }
//! ```

use crate::models::{Category, DeleteResult};
use anyhow::Result;
use async_trait::async_trait;

/// Abstraction layer for category persistence
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the store can be shared across
/// request handlers behind an `Arc`.
///
/// # Method Categories
///
/// - **Core CRUD**: insert, get, update, delete
/// - **Querying**: children of a parent, full collection scan
#[async_trait]
pub trait CategoryStore: Send + Sync {
    //
    // CORE CRUD OPERATIONS
    //

    /// Insert a new category
    ///
    /// # Errors
    ///
    /// Returns error if the category fails validation or the ID already exists.
    /// Parent existence is NOT checked here; that belongs to the hierarchy engine.
    async fn insert_category(&self, category: Category) -> Result<Category>;

    /// Get category by ID
    ///
    /// - `Ok(Some(category))` if it exists
    /// - `Ok(None)` if it doesn't (not an error)
    /// - `Err(_)` if the lookup itself fails
    async fn get_category(&self, id: &str) -> Result<Option<Category>>;

    /// Replace the stored record with `category` (matched by `category.id`)
    ///
    /// Returns the record as stored after the write.
    ///
    /// # Errors
    ///
    /// Returns error if no category with that ID exists.
    async fn update_category(&self, category: Category) -> Result<Category>;

    /// Delete a single category by ID
    ///
    /// Children are NOT touched; cascading is the hierarchy engine's job.
    /// Deleting a missing ID succeeds with `existed = false`.
    async fn delete_category(&self, id: &str) -> Result<DeleteResult>;

    //
    // QUERYING
    //

    /// Get direct children of a parent
    ///
    /// * `parent_id` - Parent category ID, or `None` for root categories
    async fn get_children(&self, parent_id: Option<&str>) -> Result<Vec<Category>>;

    /// Get the complete flat collection, oldest first
    async fn get_all_categories(&self) -> Result<Vec<Category>>;
}
