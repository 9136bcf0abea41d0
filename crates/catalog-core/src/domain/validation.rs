//! Field validation collaborator
//!
//! Entities validate themselves through an injected [`FieldsValidator`].
//! Rule objects declare their constraints with `validator::Validate`;
//! [`validate_rules`] flattens the outcome into [`FieldErrors`].

use std::collections::BTreeMap;

use validator::{Validate, ValidationError};

/// Field name -> ordered list of human-readable violations.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Rule-checking collaborator injected into entity factories.
pub trait FieldsValidator<T>: Send + Sync {
    /// Validate `data`, returning every violation on failure.
    fn validate(&self, data: &T) -> Result<(), FieldErrors>;
}

/// Run a rule object's declared constraints.
pub fn validate_rules<R: Validate>(rules: &R) -> Result<(), FieldErrors> {
    let Err(errors) = rules.validate() else {
        return Ok(());
    };

    let mut fields = FieldErrors::new();
    for (field, violations) in errors.field_errors() {
        fields
            .entry(field.to_string())
            .or_default()
            .extend(violations.iter().map(message_for));
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(fields)
    }
}

fn message_for(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Validator that accepts everything, for rehydration paths and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl<T> FieldsValidator<T> for AcceptAll {
    fn validate(&self, _data: &T) -> Result<(), FieldErrors> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank")
                .with_message(Cow::Borrowed("title should not be empty")));
        }
        Ok(())
    }

    #[derive(Validate)]
    struct Rules {
        #[validate(
            length(max = 5, message = "title must be shorter than or equal to 5 characters"),
            custom(function = "not_blank")
        )]
        title: String,
        #[validate(range(min = 1))]
        count: u32,
    }

    #[test]
    fn test_valid_rules() {
        let rules = Rules {
            title: "ok".to_string(),
            count: 1,
        };
        assert!(validate_rules(&rules).is_ok());
    }

    #[test]
    fn test_messages_grouped_by_field() {
        let rules = Rules {
            title: " ".to_string(),
            count: 0,
        };
        let errors = validate_rules(&rules).unwrap_err();

        assert_eq!(errors["title"], vec!["title should not be empty".to_string()]);
        assert_eq!(errors["count"], vec!["range".to_string()]);
    }

    #[test]
    fn test_max_length_message() {
        let rules = Rules {
            title: "too long".to_string(),
            count: 1,
        };
        let errors = validate_rules(&rules).unwrap_err();

        assert_eq!(
            errors.get("title"),
            Some(&vec![
                "title must be shorter than or equal to 5 characters".to_string()
            ])
        );
        assert!(!errors.contains_key("count"));
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.validate(&"anything").is_ok());
    }
}
