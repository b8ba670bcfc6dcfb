//! Cascade Failure Tests
//!
//! The record store has no multi-document transactions, so a cascade that
//! fails part-way leaves already-deleted descendants gone while the target and
//! its ancestors survive. These tests pin that window down with a store
//! wrapper that fails deletes for chosen IDs.

#[cfg(test)]
mod cascade_failure_tests {
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use category_tree_core::db::{CategoryStore, SurrealStore};
    use category_tree_core::models::{Category, DeleteResult};
    use category_tree_core::services::{CategoryService, CategoryServiceError};
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    /// Delegates to SurrealDB but refuses to delete selected categories
    struct FailingDeleteStore {
        inner: SurrealStore,
        fail_on: Mutex<HashSet<String>>,
    }

    impl FailingDeleteStore {
        async fn new() -> Self {
            Self {
                inner: SurrealStore::new_in_memory().await.unwrap(),
                fail_on: Mutex::new(HashSet::new()),
            }
        }

        fn fail_delete_of(&self, id: &str) {
            self.fail_on.lock().unwrap().insert(id.to_string());
        }
    }

    #[async_trait]
    impl CategoryStore for FailingDeleteStore {
        async fn insert_category(&self, category: Category) -> Result<Category> {
            self.inner.insert_category(category).await
        }

        async fn get_category(&self, id: &str) -> Result<Option<Category>> {
            self.inner.get_category(id).await
        }

        async fn update_category(&self, category: Category) -> Result<Category> {
            self.inner.update_category(category).await
        }

        async fn delete_category(&self, id: &str) -> Result<DeleteResult> {
            if self.fail_on.lock().unwrap().contains(id) {
                bail!("simulated storage failure deleting {}", id);
            }
            self.inner.delete_category(id).await
        }

        async fn get_children(&self, parent_id: Option<&str>) -> Result<Vec<Category>> {
            self.inner.get_children(parent_id).await
        }

        async fn get_all_categories(&self) -> Result<Vec<Category>> {
            self.inner.get_all_categories().await
        }
    }

    #[tokio::test]
    async fn test_failure_mid_cascade_keeps_target() {
        let store = Arc::new(FailingDeleteStore::new().await);
        let service = CategoryService::new(store.clone());

        let electronics = service.create_category("Electronics", None).await.unwrap();
        let mobiles = service
            .create_category("Mobiles", Some(&electronics.id))
            .await
            .unwrap();
        let android = service
            .create_category("Android", Some(&mobiles.id))
            .await
            .unwrap();

        // Android (leaf) goes first, then Mobiles fails
        store.fail_delete_of(&mobiles.id);

        let err = service.delete_category(&electronics.id).await.unwrap_err();
        match &err {
            CategoryServiceError::StoreFailed(message) => {
                assert!(message.contains("simulated storage failure"));
                assert!(message.contains(&mobiles.id));
            }
            other => panic!("Expected StoreFailed, got {:?}", other),
        }

        assert!(store.get_category(&android.id).await.unwrap().is_none());
        assert!(store.get_category(&mobiles.id).await.unwrap().is_some());
        assert!(store.get_category(&electronics.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_failure_on_target_itself() {
        let store = Arc::new(FailingDeleteStore::new().await);
        let service = CategoryService::new(store.clone());

        let books = service.create_category("Books", None).await.unwrap();
        let fiction = service
            .create_category("Fiction", Some(&books.id))
            .await
            .unwrap();

        store.fail_delete_of(&books.id);

        assert!(service.delete_category(&books.id).await.is_err());

        // Child gone, parent stranded with no children
        assert!(store.get_category(&fiction.id).await.unwrap().is_none());
        let tree = service.get_category_tree().await.unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_failure_completes() {
        let store = Arc::new(FailingDeleteStore::new().await);
        let service = CategoryService::new(store.clone());

        let root = service.create_category("Root", None).await.unwrap();
        let child = service
            .create_category("Child", Some(&root.id))
            .await
            .unwrap();

        store.fail_delete_of(&child.id);
        assert!(service.delete_category(&root.id).await.is_err());

        store.fail_on.lock().unwrap().clear();
        service.delete_category(&root.id).await.unwrap();

        assert!(store.get_all_categories().await.unwrap().is_empty());
    }
}
