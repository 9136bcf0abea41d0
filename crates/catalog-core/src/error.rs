//! Error types for Catalog

use thiserror::Error;

use crate::domain::validation::FieldErrors;

/// Result type alias using Catalog's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Catalog error types with helpful messages and suggestions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Repository errors (E001-E099)
    #[error("{entity} not found using ID {id}")]
    NotFound { id: String, entity: String },

    // Identity errors (E100-E199)
    #[error("Invalid {expected}: '{value}'")]
    InvalidFormat { value: String, expected: String },

    // Entity validation errors (E200-E299)
    #[error("Entity validation failed: {}", describe_fields(.0))]
    EntityValidation(FieldErrors),
}

impl Error {
    /// Create a not found error for the given identity and entity type name
    pub fn not_found(id: impl ToString, entity: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.to_string(),
            entity: entity.into(),
        }
    }

    /// Create a format error for a malformed token
    pub fn invalid_format(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E001",
            Self::InvalidFormat { .. } => "E100",
            Self::EntityValidation(_) => "E200",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound { entity, .. } => {
                Some(format!("Search the {} repository for an existing ID", entity))
            }
            Self::InvalidFormat { expected, .. } => {
                Some(format!("Provide a canonical {}", expected))
            }
            Self::EntityValidation(_) => None,
        }
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::EntityValidation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn describe_fields(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
