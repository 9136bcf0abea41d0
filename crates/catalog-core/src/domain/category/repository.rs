//! Category repository trait

use super::entity::Category;
use crate::domain::repository::SearchableRepository;

/// Searchable category storage, filtered by a text query
pub trait CategoryRepository: SearchableRepository<Category, String> {}

impl<T: SearchableRepository<Category, String>> CategoryRepository for T {}
