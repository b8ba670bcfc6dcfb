//! Hierarchy Engine
//!
//! Keeps `path` and `level` consistent with `parent_id` across the flat
//! category collection:
//!
//! - [`resolve_placement`] / [`placement_for`]: derive path and level from the parent
//! - [`ensure_not_descendant`]: reject moves that would create a cycle
//! - [`refresh_descendants`]: rewrite a subtree after its root was renamed or moved
//! - [`cascade_delete`]: delete a category and everything below it
//! - [`build_tree`]: reconstruct the nested forest for reads
//!
//! Everything here works against `&dyn CategoryStore`, never a concrete database.

mod cascade;
mod error;
mod placement;
mod refresh;
mod tree;

pub use cascade::{cascade_delete, plan_subtree_deletion};
pub use error::HierarchyError;
pub use placement::{ensure_not_descendant, placement_for, resolve_placement, Placement};
pub use refresh::refresh_descendants;
pub use tree::build_tree;

/// Upper bound on ancestor walks and subtree traversals
pub const MAX_HIERARCHY_DEPTH: usize = 1000;
