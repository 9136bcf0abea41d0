//! Category validation rules

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use super::entity::Category;
use crate::domain::validation::{FieldErrors, FieldsValidator, validate_rules};

/// Declared constraints for a category's fields
#[derive(Debug, Validate)]
pub struct CategoryRules {
    #[validate(
        custom(function = "not_empty"),
        length(max = 255, message = "name must be shorter than or equal to 255 characters")
    )]
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<&Category> for CategoryRules {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
        }
    }
}

fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("not_empty")
            .with_message(Cow::Borrowed("name should not be empty")));
    }
    Ok(())
}

/// Validates categories against [`CategoryRules`]
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryValidator;

impl FieldsValidator<Category> for CategoryValidator {
    fn validate(&self, data: &Category) -> Result<(), FieldErrors> {
        validate_rules(&CategoryRules::from(data))
    }
}

pub struct CategoryValidatorFactory;

impl CategoryValidatorFactory {
    pub fn create() -> CategoryValidator {
        CategoryValidator
    }
}
