//! Error module tests

use crate::domain::validation::FieldErrors;
use crate::error::{Error, Result};

#[test]
fn test_not_found_error() {
    let error = Error::not_found("8f1c3f0e-3b0a-4c55-9a57-0c2f2a1f6c11", "Category");
    assert_eq!(error.code(), "E001");
    assert_eq!(
        error.suggestion(),
        Some("Search the Category repository for an existing ID".to_string())
    );
    assert_eq!(
        error.to_string(),
        "Category not found using ID 8f1c3f0e-3b0a-4c55-9a57-0c2f2a1f6c11"
    );
}

#[test]
fn test_invalid_format_error() {
    let error = Error::invalid_format("not-a-uuid", "UUID");
    assert_eq!(error.code(), "E100");
    assert_eq!(error.suggestion(), Some("Provide a canonical UUID".to_string()));
    assert!(error.to_string().contains("not-a-uuid"));
}

#[test]
fn test_entity_validation_error() {
    let mut errors = FieldErrors::new();
    errors.insert(
        "name".to_string(),
        vec![
            "name should not be empty".to_string(),
            "name must be a string".to_string(),
        ],
    );
    let error = Error::EntityValidation(errors.clone());

    assert_eq!(error.code(), "E200");
    assert_eq!(error.suggestion(), None);
    assert_eq!(error.field_errors(), Some(&errors));
    assert_eq!(
        error.to_string(),
        "Entity validation failed: name: name should not be empty, name must be a string"
    );
}

#[test]
fn test_field_errors_absent_for_other_variants() {
    assert!(Error::not_found("x", "Category").field_errors().is_none());
    assert!(Error::invalid_format("x", "UUID").field_errors().is_none());
}

#[test]
fn test_result_type_alias() {
    fn returns_result() -> Result<i32> {
        Ok(42)
    }

    fn returns_error() -> Result<i32> {
        Err(Error::invalid_format("bad", "UUID"))
    }

    assert_eq!(returns_result().unwrap(), 42);
    assert!(returns_error().is_err());
}

#[test]
fn test_all_error_codes_unique() {
    let errors = vec![
        Error::not_found("id", "Category"),
        Error::invalid_format("bad", "UUID"),
        Error::EntityValidation(FieldErrors::new()),
    ];

    let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
    let mut unique = codes.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(codes.len(), unique.len());
}
