//! Category Service - Hierarchy-Aware CRUD
//!
//! This module sequences record store calls with hierarchy engine
//! computations:
//!
//! - create: validate, resolve parent, compute path/level, insert
//! - update: replace name and parent, reject cycles, refresh descendant paths
//! - delete: cascade through the whole subtree, leaf first
//! - tree: one full scan, then in-memory reconstruction
//!
//! # Consistency
//!
//! The store offers single-document atomicity only. A failed cascade leaves
//! already-deleted descendants gone; a failed descendant refresh leaves the
//! remaining descendants with stale paths. Both are logged and returned as
//! errors, never swallowed.

use crate::db::CategoryStore;
use crate::hierarchy::{
    build_tree, cascade_delete, ensure_not_descendant, refresh_descendants, resolve_placement,
};
use crate::models::{Category, CategoryTree};
use crate::services::error::CategoryServiceError;
use chrono::Utc;
use std::sync::Arc;

/// Business logic for the category hierarchy
///
/// Cheap to clone; all clones share the same store.
///
/// # Examples
///
/// ```rust,no_run
/// # use category_tree_core::db::SurrealStore;
/// # use category_tree_core::services::CategoryService;
/// # use std::sync::Arc;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(SurrealStore::new_in_memory().await?);
/// let service = CategoryService::new(store);
///
/// let electronics = service.create_category("Electronics", None).await?;
/// let mobiles = service.create_category("Mobiles", Some(&electronics.id)).await?;
/// assert_eq!(mobiles.path, "/Electronics/Mobiles");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    /// Create a service over the given record store
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Access the underlying record store
    pub fn store(&self) -> &Arc<dyn CategoryStore> {
        &self.store
    }

    /// Create a category under `parent_id` (or as a root when `None`)
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `name` is empty or whitespace only
    /// - `ParentNotFound` if `parent_id` does not exist
    /// - `StoreFailed` on store errors
    pub async fn create_category(
        &self,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<Category, CategoryServiceError> {
        let placement = resolve_placement(self.store.as_ref(), name, parent_id).await?;

        let category = Category::new(
            name.to_string(),
            parent_id.map(str::to_string),
            placement.path,
            placement.level,
        );

        let created = self
            .store
            .insert_category(category)
            .await
            .map_err(CategoryServiceError::store_failed)?;

        tracing::info!(id = %created.id, path = %created.path, "Category created");
        Ok(created)
    }

    /// Get a single category by ID
    pub async fn get_category(&self, id: &str) -> Result<Category, CategoryServiceError> {
        self.store
            .get_category(id)
            .await
            .map_err(CategoryServiceError::store_failed)?
            .ok_or_else(|| CategoryServiceError::category_not_found(id))
    }

    /// Replace the name and parent of an existing category
    ///
    /// `parent_id = None` turns the category into a root. When the resulting
    /// path or level differs from the stored one, every descendant is
    /// rewritten as well.
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if `id` does not exist
    /// - `ValidationFailed` if `name` is empty or whitespace only
    /// - `ParentNotFound` if `parent_id` does not exist
    /// - `CircularReference` if `parent_id` is the category itself or one of its descendants
    /// - `StoreFailed` on store errors
    pub async fn update_category(
        &self,
        id: &str,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<Category, CategoryServiceError> {
        let mut category = self.get_category(id).await?;

        let placement = resolve_placement(self.store.as_ref(), name, parent_id).await?;
        if let Some(parent_id) = parent_id {
            ensure_not_descendant(self.store.as_ref(), id, parent_id).await?;
        }

        let moved = category.path != placement.path || category.level != placement.level;

        category.name = name.to_string();
        category.parent_id = parent_id.map(str::to_string);
        category.path = placement.path;
        category.level = placement.level;
        category.modified_at = Utc::now();

        let updated = self
            .store
            .update_category(category)
            .await
            .map_err(CategoryServiceError::store_failed)?;

        if moved {
            let refreshed = refresh_descendants(self.store.as_ref(), &updated)
                .await
                .inspect_err(|e| {
                    tracing::warn!(id, "Descendant path refresh failed: {}", e);
                })?;
            tracing::debug!(id, refreshed, "Refreshed descendant paths");
        }

        tracing::info!(id, path = %updated.path, "Category updated");
        Ok(updated)
    }

    /// Delete a category together with all of its descendants
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if `id` does not exist
    /// - `StoreFailed` if any single delete fails; deletions already made are kept
    pub async fn delete_category(&self, id: &str) -> Result<(), CategoryServiceError> {
        let category = self.get_category(id).await?;

        let deleted = cascade_delete(self.store.as_ref(), &category).await?;

        tracing::info!(id, deleted = deleted.len(), "Category deleted");
        Ok(())
    }

    /// Reconstruct the full category forest
    ///
    /// Orphaned categories (parent missing) are left out.
    pub async fn get_category_tree(&self) -> Result<Vec<CategoryTree>, CategoryServiceError> {
        let categories = self
            .store
            .get_all_categories()
            .await
            .map_err(CategoryServiceError::store_failed)?;

        let total = categories.len();
        let tree = build_tree(categories);

        let reachable: usize = tree.iter().map(CategoryTree::size).sum();
        if reachable < total {
            tracing::warn!(
                excluded = total - reachable,
                "Categories unreachable from any root were left out of the tree"
            );
        }

        tracing::info!(roots = tree.len(), categories = reachable, "Category tree retrieved");
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SurrealStore;

    async fn create_test_service() -> CategoryService {
        let store = SurrealStore::new_in_memory().await.unwrap();
        CategoryService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_root_and_child() {
        let service = create_test_service().await;

        let electronics = service.create_category("Electronics", None).await.unwrap();
        assert_eq!(electronics.path, "/Electronics");
        assert_eq!(electronics.level, 0);
        assert!(electronics.parent_id.is_none());

        let mobiles = service
            .create_category("Mobiles", Some(&electronics.id))
            .await
            .unwrap();
        assert_eq!(mobiles.path, "/Electronics/Mobiles");
        assert_eq!(mobiles.level, 1);
        assert_eq!(mobiles.parent_id.as_deref(), Some(electronics.id.as_str()));
    }

    #[tokio::test]
    async fn test_create_with_missing_parent_writes_nothing() {
        let service = create_test_service().await;

        let err = service
            .create_category("Orphan", Some("nonexistent"))
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryServiceError::ParentNotFound { .. }));
        assert!(service.store().get_all_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_blank_name_fails_validation() {
        let service = create_test_service().await;

        for name in ["", "   "] {
            let err = service.create_category(name, None).await.unwrap_err();
            assert!(matches!(err, CategoryServiceError::ValidationFailed(_)));
        }
    }

    #[tokio::test]
    async fn test_get_category() {
        let service = create_test_service().await;
        let books = service.create_category("Books", None).await.unwrap();

        assert_eq!(service.get_category(&books.id).await.unwrap(), books);
        assert!(matches!(
            service.get_category("missing").await,
            Err(CategoryServiceError::CategoryNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_missing_category() {
        let service = create_test_service().await;

        let err = service
            .update_category("missing", "Anything", None)
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryServiceError::CategoryNotFound { ref id } if id == "missing"));
    }

    #[tokio::test]
    async fn test_update_without_parent_makes_root() {
        let service = create_test_service().await;
        let electronics = service.create_category("Electronics", None).await.unwrap();
        let mobiles = service
            .create_category("Mobiles", Some(&electronics.id))
            .await
            .unwrap();

        let updated = service
            .update_category(&mobiles.id, "Mobiles", None)
            .await
            .unwrap();

        assert!(updated.is_root());
        assert_eq!(updated.path, "/Mobiles");
        assert_eq!(updated.level, 0);
        assert!(updated.modified_at >= mobiles.modified_at);
        assert_eq!(updated.created_at, mobiles.created_at);
    }

    #[tokio::test]
    async fn test_update_with_missing_parent_leaves_category_unchanged() {
        let service = create_test_service().await;
        let books = service.create_category("Books", None).await.unwrap();

        let err = service
            .update_category(&books.id, "Novels", Some("nonexistent"))
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryServiceError::ParentNotFound { .. }));
        assert_eq!(service.get_category(&books.id).await.unwrap(), books);
    }

    #[tokio::test]
    async fn test_update_with_blank_name_leaves_category_unchanged() {
        let service = create_test_service().await;
        let electronics = service.create_category("Electronics", None).await.unwrap();
        let mobiles = service
            .create_category("Mobiles", Some(&electronics.id))
            .await
            .unwrap();

        for name in ["", "  "] {
            let err = service
                .update_category(&mobiles.id, name, Some(&electronics.id))
                .await
                .unwrap_err();

            assert!(matches!(err, CategoryServiceError::ValidationFailed(_)));
            assert_eq!(err.code(), "VALIDATION_ERROR");
        }
        assert_eq!(service.get_category(&mobiles.id).await.unwrap(), mobiles);
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let service = create_test_service().await;

        let err = service.delete_category("missing").await.unwrap_err();

        assert!(matches!(err, CategoryServiceError::CategoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_tree() {
        let service = create_test_service().await;

        assert!(service.get_category_tree().await.unwrap().is_empty());
    }
}
