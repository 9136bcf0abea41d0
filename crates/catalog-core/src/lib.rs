//! Catalog Core Library
//!
//! This crate provides a small domain-modeling toolkit, including:
//! - Value objects and UUID entity identities
//! - The entity contract and a reference Category aggregate
//! - Field validation through an injected collaborator
//! - Normalized search parameters and paginated search results
//! - Generic in-memory repositories with filtered, sorted, paginated search
//! - File/env configuration and tracing bootstrap

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

#[cfg(test)]
mod error_tests;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::search::{
        SearchParams, SearchParamsProps, SearchResult, SortDirection,
    };
    pub use crate::domain::{Entity, Repository, SearchableRepository, Uuid, ValueObject};
    pub use crate::error::{Error, Result};
    pub use crate::infrastructure::memory::{InMemoryRepository, InMemorySearchableRepository};
}
