//! Nested tree reconstruction from the flat collection

use crate::models::{Category, CategoryTree};
use std::collections::HashMap;

/// Build the nested forest of all root categories
///
/// Runs in O(n): one pass indexes children by parent ID, a second pass
/// attaches them. Siblings keep their relative order from `categories`.
///
/// Categories whose `parent_id` references a missing category (orphans) are
/// not reachable from any root and are left out, together with their subtrees.
///
/// # Examples
///
/// ```rust
/// use category_tree_core::hierarchy::build_tree;
/// use category_tree_core::models::Category;
///
/// let root = Category::new("Books".into(), None, "/Books".into(), 0);
/// let child = Category::new("Fiction".into(), Some(root.id.clone()), "/Books/Fiction".into(), 1);
///
/// let tree = build_tree(vec![root, child]);
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].children[0].category.name, "Fiction");
/// ```
pub fn build_tree(categories: Vec<Category>) -> Vec<CategoryTree> {
    let mut roots = Vec::new();
    let mut children_of: HashMap<String, Vec<usize>> = HashMap::new();

    for (idx, category) in categories.iter().enumerate() {
        match &category.parent_id {
            Some(parent_id) => children_of.entry(parent_id.clone()).or_default().push(idx),
            None => roots.push(idx),
        }
    }

    let mut slots: Vec<Option<Category>> = categories.into_iter().map(Some).collect();

    roots
        .into_iter()
        .filter_map(|idx| attach(idx, &children_of, &mut slots))
        .collect()
}

fn attach(
    idx: usize,
    children_of: &HashMap<String, Vec<usize>>,
    slots: &mut [Option<Category>],
) -> Option<CategoryTree> {
    // Each slot is taken once, so a malformed cycle cannot recurse forever
    let category = slots[idx].take()?;

    let children = match children_of.get(&category.id) {
        Some(indices) => indices
            .iter()
            .filter_map(|&child| attach(child, children_of, slots))
            .collect(),
        None => Vec::new(),
    };

    Some(CategoryTree { category, children })
}
