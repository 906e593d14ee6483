//! Shared utilities and types for feature modules
//!
//! This module contains reusable code to reduce duplication across feature implementations.
//!
//! # Contents
//!
//! - **listing**: Sort enums and the aggregate listing statement builders
//! - **pagination**: `limit`/`p` resolution and the page container
//! - **existence**: Referenced-entity checks run alongside dependent operations
//! - **validation**: Input validation utilities
//! - **test_helpers**: Test fixtures and utilities (test-only)

pub mod existence;
pub mod listing;
pub mod pagination;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use existence::{ensure_exists, with_existence, Lookup};
pub use listing::{ArticleListing, ArticleSortColumn, CommentListing, SortOrder};
pub use pagination::{Page, PageParams, PageWindow, DEFAULT_LIMIT};
pub use validation::ValidationError;
