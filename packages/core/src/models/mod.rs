//! Data Models
//!
//! This module contains the data structures used throughout the category tree:
//!
//! - `Category` - A single record of the flat category collection
//! - `CategoryTree` - Nested view rebuilt from the flat collection
//! - `ValidationError` - Input validation failures

mod category;

pub use category::{
    validate_name, Category, CategoryTree, DeleteResult, ValidationError, PATH_SEPARATOR,
};
