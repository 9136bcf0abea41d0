//! Value object trait: equality by value, not identity.

use std::any::Any;
use std::fmt::Debug;

/// Immutable value compared by its contents.
///
/// Structural equality comes from `PartialEq`; `equals` adds the
/// loosely-typed comparison used at API boundaries, where the other side
/// may be missing or of another concrete type.
pub trait ValueObject: Clone + PartialEq + Debug + 'static {
    /// `true` iff `other` is present, of the same concrete type, and
    /// structurally equal to `self`.
    fn equals(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }
}
