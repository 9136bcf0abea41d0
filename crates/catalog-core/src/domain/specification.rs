//! Specification pattern for composable filter predicates
//!
//! Concrete repositories express their search filter as a specification
//! and combine them with boolean logic (and, or, not).

use std::marker::PhantomData;
use std::sync::Arc;

/// Predicate object over entities of type `T`
pub trait Specification<T>: Send + Sync {
    /// Check if the entity satisfies this specification
    fn is_satisfied_by(&self, entity: &T) -> bool;

    /// Keep only the items satisfying this specification, preserving order
    fn select<'a>(&self, items: Vec<&'a T>) -> Vec<&'a T> {
        items
            .into_iter()
            .filter(|item| self.is_satisfied_by(item))
            .collect()
    }

    /// Combine with another specification using AND
    fn and<S: Specification<T> + 'static>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
    {
        AndSpecification {
            left: Arc::new(self),
            right: Arc::new(other),
        }
    }

    /// Combine with another specification using OR
    fn or<S: Specification<T> + 'static>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
    {
        OrSpecification {
            left: Arc::new(self),
            right: Arc::new(other),
        }
    }

    /// Negate this specification
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification {
            spec: Arc::new(self),
        }
    }
}

pub struct AndSpecification<T> {
    left: Arc<dyn Specification<T>>,
    right: Arc<dyn Specification<T>>,
}

impl<T> Specification<T> for AndSpecification<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.left.is_satisfied_by(entity) && self.right.is_satisfied_by(entity)
    }
}

pub struct OrSpecification<T> {
    left: Arc<dyn Specification<T>>,
    right: Arc<dyn Specification<T>>,
}

impl<T> Specification<T> for OrSpecification<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.left.is_satisfied_by(entity) || self.right.is_satisfied_by(entity)
    }
}

pub struct NotSpecification<T> {
    spec: Arc<dyn Specification<T>>,
}

impl<T> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        !self.spec.is_satisfied_by(entity)
    }
}

/// A specification backed by a closure
pub struct PredicateSpec<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    predicate: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> Specification<T> for PredicateSpec<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        (self.predicate)(entity)
    }
}

/// Helper function to create a specification from a closure
pub fn spec<T, F>(predicate: F) -> PredicateSpec<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    PredicateSpec {
        predicate,
        _phantom: PhantomData,
    }
}

/// Case-insensitive substring match on a text field
pub struct TextContains<T> {
    needle: String,
    field: fn(&T) -> &str,
}

impl<T> TextContains<T> {
    pub fn new(needle: &str, field: fn(&T) -> &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
            field,
        }
    }
}

impl<T> Specification<T> for TextContains<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        (self.field)(entity).to_lowercase().contains(&self.needle)
    }
}
