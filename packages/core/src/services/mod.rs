//! Business Services
//!
//! - [`CategoryService`]: hierarchy-aware create, update, delete and tree reads
//! - [`CategoryServiceError`]: the single error type callers match on

pub mod category_service;
pub mod error;


pub use category_service::CategoryService;
pub use error::CategoryServiceError;
