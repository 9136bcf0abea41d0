//! Category Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entity::Entity;
use crate::domain::identity::Uuid;
use crate::domain::validation::FieldsValidator;
use crate::error::{Error, Result};

/// Properties used to rehydrate a category, e.g. after loading it from storage
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a brand-new category
#[derive(Debug, Clone, Default)]
pub struct CategoryCreateCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Rehydrate a category without validating it
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Create and validate a new category
    pub fn create(
        command: CategoryCreateCommand,
        validator: &dyn FieldsValidator<Category>,
    ) -> Result<Self> {
        let category = Self::new(CategoryProps {
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            ..Default::default()
        });
        Self::validate(&category, validator)?;
        debug!(category_id = %category.category_id, "Category created");
        Ok(category)
    }

    /// Rename, keeping the previous name if the new one is invalid
    pub fn change_name(
        &mut self,
        name: impl Into<String>,
        validator: &dyn FieldsValidator<Category>,
    ) -> Result<()> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        Self::validate(&candidate, validator)?;
        *self = candidate;
        Ok(())
    }

    /// Replace the description, keeping the previous one if the result is invalid
    pub fn change_description(
        &mut self,
        description: Option<String>,
        validator: &dyn FieldsValidator<Category>,
    ) -> Result<()> {
        let mut candidate = self.clone();
        candidate.description = description;
        Self::validate(&candidate, validator)?;
        *self = candidate;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Check a category against the injected rules
    pub fn validate(category: &Category, validator: &dyn FieldsValidator<Category>) -> Result<()> {
        validator.validate(category).map_err(Error::EntityValidation)
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Category {
    type Id = Uuid;

    fn entity_name() -> &'static str {
        "Category"
    }

    fn entity_id(&self) -> &Uuid {
        &self.category_id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Category {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryValidatorFactory;
    use crate::domain::validation::{AcceptAll, FieldErrors};
    use std::sync::Mutex;

    /// Records every validated category and fails on demand
    #[derive(Default)]
    struct RecordingValidator {
        seen: Mutex<Vec<String>>,
        fail: bool,
    }

    impl FieldsValidator<Category> for RecordingValidator {
        fn validate(&self, data: &Category) -> std::result::Result<(), FieldErrors> {
            self.seen.lock().unwrap().push(data.name().to_string());
            if self.fail {
                let mut errors = FieldErrors::new();
                errors.insert("name".to_string(), vec!["rejected".to_string()]);
                return Err(errors);
            }
            Ok(())
        }
    }

    #[test]
    fn test_new_with_only_name() {
        let category = Category::new(CategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        });

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert!(category.created_at() <= Utc::now());
        assert_eq!(category.category_id().id().len(), 36);
    }

    #[test]
    fn test_new_with_all_props() {
        let id = Uuid::new();
        let created_at = Utc::now();
        let category = Category::new(CategoryProps {
            category_id: Some(id),
            name: "Movie".to_string(),
            description: Some("Testing".to_string()),
            is_active: Some(false),
            created_at: Some(created_at),
        });

        assert_eq!(category.category_id(), &id);
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), Some("Testing"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn test_create_validates_once() {
        let validator = RecordingValidator::default();
        let category = Category::create(
            CategoryCreateCommand {
                name: "Movie".to_string(),
                ..Default::default()
            },
            &validator,
        )
        .unwrap();

        assert_eq!(category.name(), "Movie");
        assert!(category.is_active());
        assert_eq!(*validator.seen.lock().unwrap(), vec!["Movie".to_string()]);
    }

    #[test]
    fn test_create_surfaces_validation_errors() {
        let validator = RecordingValidator {
            fail: true,
            ..Default::default()
        };
        let err = Category::create(
            CategoryCreateCommand {
                name: "Movie".to_string(),
                ..Default::default()
            },
            &validator,
        )
        .unwrap_err();

        assert_eq!(err.field_errors().unwrap()["name"], vec!["rejected".to_string()]);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let err = Category::create(
            CategoryCreateCommand::default(),
            &CategoryValidatorFactory::create(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::EntityValidation(_)));
    }

    #[test]
    fn test_change_name_validates() {
        let validator = CategoryValidatorFactory::create();
        let mut category = Category::new(CategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        });

        category.change_name("Series", &validator).unwrap();
        assert_eq!(category.name(), "Series");

        assert!(category.change_name("", &validator).is_err());
        assert_eq!(category.name(), "Series");
    }

    #[test]
    fn test_change_description() {
        let mut category = Category::new(CategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        });

        category
            .change_description(Some("Feature films".to_string()), &AcceptAll)
            .unwrap();
        assert_eq!(category.description(), Some("Feature films"));

        category.change_description(None, &AcceptAll).unwrap();
        assert_eq!(category.description(), None);
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut category = Category::new(CategoryProps {
            name: "Movie".to_string(),
            is_active: Some(false),
            ..Default::default()
        });

        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn test_equality_is_by_identity() {
        let a = Category::new(CategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        });
        let b = Category::new(CategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        });
        let mut renamed = a.clone();
        renamed.change_name("Series", &AcceptAll).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, renamed);
    }

    #[test]
    fn test_to_json() {
        let id = Uuid::new();
        let created_at = Utc::now();
        let category = Category::new(CategoryProps {
            category_id: Some(id),
            name: "Movie".to_string(),
            created_at: Some(created_at),
            ..Default::default()
        });

        assert_eq!(
            category.to_json().unwrap(),
            serde_json::json!({
                "categoryId": id.id(),
                "name": "Movie",
                "description": null,
                "isActive": true,
                "createdAt": created_at,
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let category = Category::new(CategoryProps {
            name: "Movie".to_string(),
            description: Some("Films".to_string()),
            is_active: Some(false),
            ..Default::default()
        });

        let restored: Category = serde_json::from_value(category.to_json().unwrap()).unwrap();

        assert_eq!(restored, category);
        assert_eq!(restored.description(), Some("Films"));
        assert!(!restored.is_active());
        assert_eq!(restored.created_at(), category.created_at());
    }
}
