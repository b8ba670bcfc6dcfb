//! Cascading subtree deletion
//!
//! Deletion runs in two phases: the subtree is first walked into a
//! deletion plan (children before parents), then the plan is executed one
//! document at a time. The store has no transactions, so a failure part-way
//! leaves the already-deleted descendants gone while the root survives.

use super::{HierarchyError, MAX_HIERARCHY_DEPTH};
use crate::db::CategoryStore;
use crate::models::Category;
use std::collections::HashSet;

struct Frame {
    id: String,
    depth: usize,
    expanded: bool,
}

/// Collect the IDs of `root_id` and all its descendants, deepest first
///
/// The returned order is post-order: every category appears after all of its
/// descendants and `root_id` is always last. Sibling order follows
/// [`CategoryStore::get_children`].
///
/// # Errors
///
/// - `DepthLimitExceeded` if the subtree is deeper than [`MAX_HIERARCHY_DEPTH`]
/// - `Store` if listing children fails
pub async fn plan_subtree_deletion(
    store: &dyn CategoryStore,
    root_id: &str,
) -> Result<Vec<String>, HierarchyError> {
    let mut order = Vec::new();
    let mut visited = HashSet::from([root_id.to_string()]);
    let mut stack = vec![Frame {
        id: root_id.to_string(),
        depth: 0,
        expanded: false,
    }];

    while let Some(frame) = stack.pop() {
        if frame.expanded {
            order.push(frame.id);
            continue;
        }

        if frame.depth >= MAX_HIERARCHY_DEPTH {
            return Err(HierarchyError::depth_limit_exceeded(
                root_id,
                MAX_HIERARCHY_DEPTH,
            ));
        }

        let children = store.get_children(Some(&frame.id)).await?;
        let depth = frame.depth;
        stack.push(Frame {
            expanded: true,
            ..frame
        });

        // Reversed so the first child is popped first
        for child in children.into_iter().rev() {
            if !visited.insert(child.id.clone()) {
                tracing::warn!(
                    root_id,
                    category_id = %child.id,
                    "Category reachable twice while planning deletion, skipping"
                );
                continue;
            }
            stack.push(Frame {
                id: child.id,
                depth: depth + 1,
                expanded: false,
            });
        }
    }

    Ok(order)
}

/// Delete `root` together with its entire subtree
///
/// Returns the IDs processed, in deletion order (root last). A descendant
/// that disappeared between planning and deletion is tolerated.
///
/// # Errors
///
/// Store failures are returned as `Store` with the underlying error kept as
/// the source. Categories deleted before the failure stay deleted.
pub async fn cascade_delete(
    store: &dyn CategoryStore,
    root: &Category,
) -> Result<Vec<String>, HierarchyError> {
    let plan = plan_subtree_deletion(store, &root.id).await?;
    tracing::debug!(root_id = %root.id, planned = plan.len(), "Planned subtree deletion");

    let mut deleted = Vec::with_capacity(plan.len());

    for id in plan {
        match store.delete_category(&id).await {
            Ok(result) => {
                if !result.existed {
                    tracing::debug!(category_id = %id, "Category already gone during cascade");
                }
                deleted.push(id);
            }
            Err(e) => {
                tracing::warn!(
                    root_id = %root.id,
                    failed_id = %id,
                    deleted = deleted.len(),
                    "Cascade delete interrupted; deleted descendants are not restored"
                );
                return Err(HierarchyError::Store(e.context(format!(
                    "Failed to delete category {} while deleting subtree of {}",
                    id, root.id
                ))));
            }
        }
    }

    Ok(deleted)
}
