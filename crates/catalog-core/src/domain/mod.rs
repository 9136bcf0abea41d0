//! Domain layer
//!
//! Value objects, entities, validation, and the search and repository
//! contracts.

pub mod category;
pub mod entity;
pub mod identity;
pub mod repository;
pub mod search;
pub mod specification;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use identity::Uuid;
pub use repository::{Repository, SearchableRepository};
pub use value_object::ValueObject;
