//! Category Data Structures
//!
//! This module defines the `Category` record stored in the category collection
//! and the nested `CategoryTree` view produced when the flat collection is
//! reassembled into a hierarchy.
//!
//! # Derived Fields
//!
//! - **`path`**: Materialized path, `/Root/Child/Grandchild`. Always starts with `/`.
//! - **`level`**: Depth in the hierarchy, `0` for root categories.
//!
//! Both are computed by the hierarchy engine and are never accepted from callers.
//!
//! # Examples
//!
//! ```rust
//! use category_tree_core::models::Category;
//!
//! let root = Category::new("Electronics".to_string(), None, "/Electronics".to_string(), 0);
//! let child = Category::new(
//!     "Mobiles".to_string(),
//!     Some(root.id.clone()),
//!     "/Electronics/Mobiles".to_string(),
//!     1,
//! );
//!
//! assert!(root.is_root());
//! assert!(!child.is_root());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Separator between ancestor names in a materialized path
pub const PATH_SEPARATOR: char = '/';

/// Validation errors for category input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid parent reference: {0}")]
    InvalidParent(String),
}

/// A single node of the category hierarchy.
///
/// # Fields
///
/// - `id`: Unique identifier (UUID v4), assigned on creation and never changed
/// - `name`: Display label, required and non-empty
/// - `parent_id`: Parent category ID; `None` marks a root category
/// - `path`: Materialized path from the root down to this category
/// - `level`: Depth in the hierarchy (root = 0)
/// - `created_at`: Timestamp when the category was created
/// - `modified_at`: Timestamp of the last write, including path refreshes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Parent category ID (None for root categories)
    pub parent_id: Option<String>,

    /// Materialized path, e.g. `/Electronics/Mobiles`
    pub path: String,

    /// Depth in the hierarchy (0 for root categories)
    pub level: u32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category with an auto-generated UUID
    ///
    /// `path` and `level` are expected to come from
    /// [`placement_for`](crate::hierarchy::placement_for) or
    /// [`resolve_placement`](crate::hierarchy::resolve_placement).
    pub fn new(name: String, parent_id: Option<String>, path: String, level: u32) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            parent_id,
            path,
            level,
            created_at: now,
            modified_at: now,
        }
    }

    /// Whether this category sits at the top of the hierarchy
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Validate the structural fields of the category
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - `id` is empty
    /// - `name` is empty or whitespace only
    /// - the category references itself as parent
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        validate_name(&self.name)?;

        if self.parent_id.as_deref() == Some(self.id.as_str()) {
            return Err(ValidationError::InvalidParent(
                "Category cannot be its own parent".to_string(),
            ));
        }

        Ok(())
    }
}

/// Reject empty or whitespace-only category names
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()));
    }
    Ok(())
}

/// Nested view of a category and its descendants
///
/// The category's own fields are flattened into the JSON object next to the
/// `children` array, so a serialized tree node reads like a category record
/// with an extra field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,

    /// Direct children, each carrying its own subtree (always present, possibly empty)
    pub children: Vec<CategoryTree>,
}

impl CategoryTree {
    /// A tree node with no children yet
    pub fn leaf(category: Category) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }

    /// Total number of categories in this subtree, including the node itself
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(CategoryTree::size).sum::<usize>()
    }

    /// Depth-first search for a category by name
    pub fn find_by_name(&self, name: &str) -> Option<&CategoryTree> {
        if self.category.name == name {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_name(name))
    }
}

/// Result of deleting a single record from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    /// Whether a record with the requested ID existed before the delete
    pub existed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_category_is_root_without_parent() {
        let category = Category::new("Books".to_string(), None, "/Books".to_string(), 0);

        assert!(category.is_root());
        assert_eq!(category.created_at, category.modified_at);
        assert!(Uuid::parse_str(&category.id).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let category = Category::new("   ".to_string(), None, "/   ".to_string(), 0);

        assert_eq!(
            category.validate(),
            Err(ValidationError::MissingField("name".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_self_parent() {
        let mut category = Category::new("Loop".to_string(), None, "/Loop".to_string(), 0);
        category.parent_id = Some(category.id.clone());

        assert!(matches!(
            category.validate(),
            Err(ValidationError::InvalidParent(_))
        ));
    }

    #[test]
    fn test_tree_serializes_flat_with_children() {
        let root = Category::new("Root".to_string(), None, "/Root".to_string(), 0);
        let child = Category::new(
            "Child".to_string(),
            Some(root.id.clone()),
            "/Root/Child".to_string(),
            1,
        );
        let tree = CategoryTree {
            category: root.clone(),
            children: vec![CategoryTree::leaf(child)],
        };

        let value = serde_json::to_value(&tree).unwrap();

        assert_eq!(value["id"], json!(root.id));
        assert_eq!(value["name"], json!("Root"));
        assert_eq!(value["parentId"], json!(null));
        assert_eq!(value["children"][0]["path"], json!("/Root/Child"));
        assert_eq!(value["children"][0]["level"], json!(1));
        assert_eq!(value["children"][0]["children"], json!([]));
        assert!(value.get("category").is_none(), "category must be flattened");
    }

    #[test]
    fn test_tree_size_and_lookup() {
        let root = Category::new("A".to_string(), None, "/A".to_string(), 0);
        let b = Category::new("B".to_string(), Some(root.id.clone()), "/A/B".to_string(), 1);
        let c = Category::new("C".to_string(), Some(b.id.clone()), "/A/B/C".to_string(), 2);
        let tree = CategoryTree {
            category: root,
            children: vec![CategoryTree {
                category: b,
                children: vec![CategoryTree::leaf(c)],
            }],
        };

        assert_eq!(tree.size(), 3);
        assert_eq!(tree.find_by_name("C").unwrap().category.path, "/A/B/C");
        assert!(tree.find_by_name("D").is_none());
    }
}
