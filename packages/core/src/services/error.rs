//! Service Layer Error Types
//!
//! This module defines the errors returned by `CategoryService`. Hierarchy
//! engine errors are folded into these so callers only match on one enum.

use crate::hierarchy::HierarchyError;
use crate::models::ValidationError;
use thiserror::Error;

/// Service operation errors
#[derive(Error, Debug)]
pub enum CategoryServiceError {
    /// Category not found by ID
    #[error("Category not found: {id}")]
    CategoryNotFound { id: String },

    /// Input failed validation
    #[error("Category validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Referenced parent does not exist
    #[error("Parent category not found: {parent_id}")]
    ParentNotFound { parent_id: String },

    /// Circular reference detected
    #[error("Circular reference detected: {context}")]
    CircularReference { context: String },

    /// Hierarchy constraint violation
    #[error("Hierarchy constraint violated: {0}")]
    HierarchyViolation(String),

    /// Record store failure
    #[error("Store operation failed: {0}")]
    StoreFailed(String),
}

impl CategoryServiceError {
    /// Create a category not found error
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::CategoryNotFound { id: id.into() }
    }

    /// Create a parent not found error
    pub fn parent_not_found(parent_id: impl Into<String>) -> Self {
        Self::ParentNotFound {
            parent_id: parent_id.into(),
        }
    }

    /// Create a store failure, keeping the full context chain in the message
    pub fn store_failed(err: anyhow::Error) -> Self {
        Self::StoreFailed(format!("{:#}", err))
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            Self::ValidationFailed(_) => "VALIDATION_ERROR",
            Self::ParentNotFound { .. } => "PARENT_NOT_FOUND",
            Self::CircularReference { .. } => "CIRCULAR_REFERENCE",
            Self::HierarchyViolation(_) => "HIERARCHY_VIOLATION",
            Self::StoreFailed(_) => "STORE_ERROR",
        }
    }
}

impl From<HierarchyError> for CategoryServiceError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::ParentNotFound { parent_id } => Self::ParentNotFound { parent_id },
            HierarchyError::CircularReference { context } => Self::CircularReference { context },
            HierarchyError::DepthLimitExceeded { .. } => Self::HierarchyViolation(err.to_string()),
            HierarchyError::Validation(e) => Self::ValidationFailed(e),
            HierarchyError::Store(e) => Self::store_failed(e),
        }
    }
}
