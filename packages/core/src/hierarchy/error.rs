//! Error types for the hierarchy engine

use crate::models::ValidationError;
use thiserror::Error;

/// Errors raised while computing or maintaining hierarchy invariants
#[derive(Error, Debug)]
pub enum HierarchyError {
    /// Referenced parent does not exist
    #[error("Parent category not found: {parent_id}")]
    ParentNotFound { parent_id: String },

    /// Accepting the change would make a category its own ancestor
    #[error("Circular reference detected: {context}")]
    CircularReference { context: String },

    /// Traversal went deeper than any sane category tree
    #[error("Hierarchy below '{root_id}' exceeds {limit} levels")]
    DepthLimitExceeded { root_id: String, limit: usize },

    /// Input rejected before touching the store
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Record store call failed
    #[error("Store operation failed: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl HierarchyError {
    /// Create a parent not found error
    pub fn parent_not_found(parent_id: impl Into<String>) -> Self {
        Self::ParentNotFound {
            parent_id: parent_id.into(),
        }
    }

    /// Create a circular reference error
    pub fn circular_reference(context: impl Into<String>) -> Self {
        Self::CircularReference {
            context: context.into(),
        }
    }

    /// Create a depth limit error
    pub fn depth_limit_exceeded(root_id: impl Into<String>, limit: usize) -> Self {
        Self::DepthLimitExceeded {
            root_id: root_id.into(),
            limit,
        }
    }
}
