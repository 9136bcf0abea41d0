//! Entity trait: identity + continuity across state changes.

use serde::Serialize;
use std::fmt;

use crate::domain::value_object::ValueObject;

/// A domain object with a permanent identity.
///
/// Entities are compared by identity only: two entities with the same
/// field values but different identities are distinct.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identity value object.
    type Id: ValueObject + fmt::Display + Send + Sync;

    /// Entity type name, used in diagnostics.
    fn entity_name() -> &'static str;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;

    /// Identity equality.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }

    /// Plain JSON representation of the entity.
    fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        Self: Serialize,
    {
        serde_json::to_value(self)
    }
}
