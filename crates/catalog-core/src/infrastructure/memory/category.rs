//! In-memory category repository

use crate::domain::category::Category;
use crate::domain::search::{SearchPolicy, SortValue, SortableFields};
use crate::domain::specification::{Specification, TextContains};

use super::repository::InMemorySearchableRepository;

/// Category search: case-insensitive name filter, sortable by name and creation time
#[derive(Debug, Clone)]
pub struct CategorySearchPolicy {
    fields: SortableFields<Category>,
}

impl Default for CategorySearchPolicy {
    fn default() -> Self {
        Self {
            fields: SortableFields::new("created_at", |c: &Category| -> SortValue {
                c.created_at().into()
            })
            .with("name", |c: &Category| -> SortValue { c.name().into() }),
        }
    }
}

fn category_name(category: &Category) -> &str {
    category.name()
}

impl SearchPolicy<Category> for CategorySearchPolicy {
    type Filter = String;

    fn sortable_fields(&self) -> &SortableFields<Category> {
        &self.fields
    }

    fn apply_filter<'a>(
        &self,
        items: Vec<&'a Category>,
        filter: Option<&String>,
    ) -> Vec<&'a Category> {
        match filter {
            Some(filter) => TextContains::new(filter, category_name).select(items),
            None => items,
        }
    }
}

pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchPolicy>;
