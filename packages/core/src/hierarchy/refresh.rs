//! Descendant path/level maintenance after a rename or move

use super::{placement_for, HierarchyError};
use crate::db::CategoryStore;
use crate::models::Category;
use chrono::Utc;
use std::collections::{HashSet, VecDeque};

/// Recompute path and level for every descendant of `root`
///
/// `root` must already be stored with its new placement. The subtree is
/// walked breadth-first so every parent is rewritten before its children are
/// derived from it. Only descendants whose path or level actually changes are
/// written back. Returns the number of rewritten categories.
pub async fn refresh_descendants(
    store: &dyn CategoryStore,
    root: &Category,
) -> Result<usize, HierarchyError> {
    let mut queue = VecDeque::from([root.clone()]);
    let mut visited = HashSet::from([root.id.clone()]);
    let mut refreshed = 0;

    while let Some(parent) = queue.pop_front() {
        for mut child in store.get_children(Some(&parent.id)).await? {
            if !visited.insert(child.id.clone()) {
                tracing::warn!(
                    root_id = %root.id,
                    category_id = %child.id,
                    "Category reachable twice while refreshing paths, skipping"
                );
                continue;
            }

            let placement = placement_for(&child.name, Some(&parent));
            if child.path != placement.path || child.level != placement.level {
                child.path = placement.path;
                child.level = placement.level;
                child.modified_at = Utc::now();
                child = store.update_category(child).await?;
                refreshed += 1;
            }

            queue.push_back(child);
        }
    }

    Ok(refreshed)
}
