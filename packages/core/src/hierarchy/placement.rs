//! Path and level computation
//!
//! A category's position in the hierarchy is fully described by its
//! materialized `path` and its `level`. Both derive from the parent alone:
//!
//! | Parent      | path                        | level              |
//! |-------------|-----------------------------|--------------------|
//! | none        | `"/" + name`                | `0`                |
//! | `P`         | `P.path + "/" + name`       | `P.level + 1`      |

use super::{HierarchyError, MAX_HIERARCHY_DEPTH};
use crate::db::CategoryStore;
use crate::models::{validate_name, Category, PATH_SEPARATOR};

/// Derived position of a category in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Materialized path, always starting with `/`
    pub path: String,
    /// Depth, 0 for roots
    pub level: u32,
}

/// Compute the placement of `name` under `parent` without touching the store
///
/// # Examples
///
/// ```rust
/// use category_tree_core::hierarchy::placement_for;
/// use category_tree_core::models::Category;
///
/// let root = placement_for("Electronics", None);
/// assert_eq!(root.path, "/Electronics");
/// assert_eq!(root.level, 0);
///
/// let parent = Category::new("Electronics".into(), None, root.path, root.level);
/// let child = placement_for("Mobiles", Some(&parent));
/// assert_eq!(child.path, "/Electronics/Mobiles");
/// assert_eq!(child.level, 1);
/// ```
pub fn placement_for(name: &str, parent: Option<&Category>) -> Placement {
    match parent {
        Some(parent) => Placement {
            path: format!("{}{}{}", parent.path, PATH_SEPARATOR, name),
            level: parent.level + 1,
        },
        None => Placement {
            path: format!("{}{}", PATH_SEPARATOR, name),
            level: 0,
        },
    }
}

/// Validate `name`, look up the parent (if any) and compute the placement
///
/// # Errors
///
/// - `Validation` if `name` is empty or whitespace only (checked before any lookup)
/// - `ParentNotFound` if `parent_id` is given but no such category exists
/// - `Store` if the lookup fails
pub async fn resolve_placement(
    store: &dyn CategoryStore,
    name: &str,
    parent_id: Option<&str>,
) -> Result<Placement, HierarchyError> {
    validate_name(name)?;

    let parent = match parent_id {
        Some(parent_id) => Some(
            store
                .get_category(parent_id)
                .await?
                .ok_or_else(|| HierarchyError::parent_not_found(parent_id))?,
        ),
        None => None,
    };

    Ok(placement_for(name, parent.as_ref()))
}

/// Reject moving `category_id` under `new_parent_id` if that would create a cycle
///
/// Walks up the ancestor chain of `new_parent_id`; reaching `category_id`
/// means the proposed parent is the category itself or one of its descendants.
/// A missing ancestor ends the walk (parent existence is checked separately).
pub async fn ensure_not_descendant(
    store: &dyn CategoryStore,
    category_id: &str,
    new_parent_id: &str,
) -> Result<(), HierarchyError> {
    if category_id == new_parent_id {
        return Err(HierarchyError::circular_reference(format!(
            "Category {} cannot be its own parent",
            category_id
        )));
    }

    let mut current_id = new_parent_id.to_string();

    for _ in 0..MAX_HIERARCHY_DEPTH {
        let Some(current) = store.get_category(&current_id).await? else {
            return Ok(());
        };

        match current.parent_id {
            Some(parent_id) if parent_id == category_id => {
                return Err(HierarchyError::circular_reference(format!(
                    "Cannot move category {} under its descendant {}",
                    category_id, new_parent_id
                )));
            }
            Some(parent_id) => current_id = parent_id,
            None => return Ok(()),
        }
    }

    Err(HierarchyError::depth_limit_exceeded(
        new_parent_id,
        MAX_HIERARCHY_DEPTH,
    ))
}
