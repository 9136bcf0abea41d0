//! Search parameters: a normalized, read-only query descriptor

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::config::SearchConfig;
use crate::domain::value_object::ValueObject;
use crate::error::{Error, Result};

/// Page used when none, or an invalid one, is supplied
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none, or an invalid one, is supplied
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    /// Case-insensitive `asc` / `desc`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::invalid_format(s, "sort direction")),
        }
    }
}

/// Filter values accepted by searchable repositories
pub trait SearchFilter: Clone + fmt::Debug + Send + Sync + 'static {
    /// Blank filters normalize to "no filter"
    fn is_blank(&self) -> bool {
        false
    }
}

impl SearchFilter for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Raw, unvalidated search input as received from a caller.
///
/// `page` and `per_page` are kept loosely typed so query-string style
/// input (`"2"`, `2.5`, `"abc"`, `true`) can be normalized the same way
/// as numeric input.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParamsProps<F = String> {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default, alias = "perPage")]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default, alias = "sortDir")]
    pub sort_dir: Option<String>,
    #[serde(default)]
    pub filter: Option<F>,
}

impl<F> Default for SearchParamsProps<F> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl<F> SearchParamsProps<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn sort_dir(mut self, sort_dir: impl Into<String>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Normalized search parameters.
///
/// Normalization runs once, at construction; the fields are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams<F = String> {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F: SearchFilter> SearchParams<F> {
    /// Normalize raw input using the built-in page size default
    pub fn new(props: SearchParamsProps<F>) -> Self {
        Self::normalize(props, DEFAULT_PER_PAGE)
    }

    /// Normalize raw input using the configured page size default
    pub fn with_config(props: SearchParamsProps<F>, config: &SearchConfig) -> Self {
        Self::normalize(props, config.default_per_page.max(1))
    }

    fn normalize(props: SearchParamsProps<F>, default_per_page: u64) -> Self {
        let page = props
            .page
            .as_ref()
            .and_then(positive_integer)
            .unwrap_or(DEFAULT_PAGE);
        let per_page = props
            .per_page
            .as_ref()
            .and_then(positive_integer)
            .unwrap_or(default_per_page);
        let sort = props.sort.filter(|sort| !sort.is_empty());
        // A direction only means something alongside a sort field
        let sort_dir = sort.as_ref().map(|_| {
            props
                .sort_dir
                .as_deref()
                .and_then(|dir| dir.parse().ok())
                .unwrap_or(SortDirection::Asc)
        });
        let filter = props.filter.filter(|filter| !filter.is_blank());

        Self {
            page,
            per_page,
            sort,
            sort_dir,
            filter,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }
}

impl<F: SearchFilter> Default for SearchParams<F> {
    fn default() -> Self {
        Self::new(SearchParamsProps::default())
    }
}

impl<F: SearchFilter + PartialEq> ValueObject for SearchParams<F> {}

fn positive_integer(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => {
            if let Some(n) = n.as_u64() {
                return (n > 0).then_some(n);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    (number.is_finite() && number >= 1.0 && number.fract() == 0.0).then(|| number as u64)
}
