//! Sort keys and the per-repository accessor table

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

use super::params::SortDirection;

/// A comparable value extracted from an entity field
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::Timestamp(_) => 4,
        }
    }

    /// Natural ascending order: lexicographic for text, chronological for
    /// timestamps, numeric for numbers. Mixed kinds order by kind.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Extracts a field's sort key from an entity
pub type FieldAccessor<E> = fn(&E) -> SortValue;

/// The fields a repository permits as sort keys, with their extractors.
///
/// The field passed to [`SortableFields::new`] is the fallback used when a
/// query names no sort field, or one outside this table.
pub struct SortableFields<E> {
    default_field: &'static str,
    fields: Vec<(&'static str, FieldAccessor<E>)>,
}

impl<E> SortableFields<E> {
    pub fn new(default_field: &'static str, accessor: FieldAccessor<E>) -> Self {
        Self {
            default_field,
            fields: vec![(default_field, accessor)],
        }
    }

    /// Register another sortable field
    pub fn with(mut self, name: &'static str, accessor: FieldAccessor<E>) -> Self {
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, accessor));
        self
    }

    pub fn default_field(&self) -> &'static str {
        self.default_field
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| *field == name)
    }

    /// Effective sort field for a requested one
    pub fn resolve(&self, requested: Option<&str>) -> (&'static str, FieldAccessor<E>) {
        let wanted = requested
            .filter(|name| self.contains(name))
            .unwrap_or(self.default_field);
        self.fields
            .iter()
            .find(|(name, _)| *name == wanted)
            .copied()
            // never empty: `new` registers the default field
            .unwrap_or(self.fields[0])
    }

    /// Sort `items` into a new sequence.
    ///
    /// An unknown or absent field falls back to the default field in
    /// descending order, whatever direction was requested. A known field
    /// with no direction sorts descending. Ties keep their incoming order.
    pub fn sort<'a>(
        &self,
        items: Vec<&'a E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<&'a E> {
        let (_, accessor) = self.resolve(sort);
        let direction = match sort {
            Some(name) if self.contains(name) => sort_dir.unwrap_or(SortDirection::Desc),
            _ => SortDirection::Desc,
        };

        let mut keyed: Vec<(SortValue, &'a E)> =
            items.into_iter().map(|item| (accessor(item), item)).collect();
        keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));
        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

impl<E> Clone for SortableFields<E> {
    fn clone(&self) -> Self {
        Self {
            default_field: self.default_field,
            fields: self.fields.clone(),
        }
    }
}

impl<E> fmt::Debug for SortableFields<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableFields")
            .field("default_field", &self.default_field)
            .field("fields", &self.names())
            .finish()
    }
}
