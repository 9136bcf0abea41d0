//! In-memory storage
//!
//! Single-process reference collections; nothing here is persisted.

pub mod category;
pub mod repository;

pub use category::{CategoryInMemoryRepository, CategorySearchPolicy};
pub use repository::{InMemoryRepository, InMemorySearchableRepository};
