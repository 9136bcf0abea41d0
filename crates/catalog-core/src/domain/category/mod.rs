//! Category domain module
//!
//! The category aggregate, its validation rules, and its repository trait.

pub mod entity;
pub mod repository;
pub mod validator;

pub use entity::{Category, CategoryCreateCommand, CategoryProps};
pub use repository::CategoryRepository;
pub use validator::{CategoryRules, CategoryValidator, CategoryValidatorFactory};
