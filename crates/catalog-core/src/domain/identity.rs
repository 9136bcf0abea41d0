//! Identifier value objects for entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::value_object::ValueObject;
use crate::error::{Error, Result};

/// Length of the canonical hyphenated UUID form.
const CANONICAL_LEN: usize = 36;

/// Random unique identifier for an entity.
///
/// Generated as UUID v4 when not supplied. Parsing accepts only the
/// canonical 36-character hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parses an identifier, failing with `Error::InvalidFormat` if malformed.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != CANONICAL_LEN {
            return Err(Error::invalid_format(s, "UUID"));
        }
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| Error::invalid_format(s, "UUID"))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }

    /// Returns the canonical string form.
    pub fn id(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl ValueObject for Uuid {}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Uuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_is_unique() {
        let ids: HashSet<Uuid> = (0..1000).map(|_| Uuid::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_new_is_canonical_v4() {
        let id = Uuid::new();
        assert_eq!(id.id().len(), 36);
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_parse_valid() {
        let id = Uuid::parse("9366b7dc-2d71-4799-b91c-c64adb205104").unwrap();
        assert_eq!(id.id(), "9366b7dc-2d71-4799-b91c-c64adb205104");
    }

    #[test]
    fn test_parse_invalid() {
        let err = Uuid::parse("not-a-uuid").unwrap_err();
        assert_eq!(err, Error::invalid_format("not-a-uuid", "UUID"));
    }

    #[test]
    fn test_parse_rejects_non_canonical_forms() {
        assert!(Uuid::parse("9366b7dc2d714799b91cc64adb205104").is_err());
        assert!(Uuid::parse("{9366b7dc-2d71-4799-b91c-c64adb205104}").is_err());
        assert!(Uuid::parse("urn:uuid:9366b7dc-2d71-4799-b91c-c64adb205104").is_err());
        assert!(Uuid::parse("").is_err());
    }

    #[test]
    fn test_display_and_from_str() {
        let id = Uuid::new();
        let parsed: Uuid = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_equals_by_value() {
        let a = Uuid::parse("9366b7dc-2d71-4799-b91c-c64adb205104").unwrap();
        let b = Uuid::parse("9366b7dc-2d71-4799-b91c-c64adb205104").unwrap();
        assert!(a.equals(Some(&b)));
        assert!(!a.equals(Some(&Uuid::new())));
        assert!(!a.equals(None));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let id = Uuid::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let parsed: Uuid = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Uuid>("\"not-a-uuid\"").is_err());
    }
}
