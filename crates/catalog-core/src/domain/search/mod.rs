//! Search domain module
//!
//! Filtered, sorted, paginated search over in-memory collections.
//!
//! # Architecture
//!
//! - **Params**: `SearchParams` normalizes raw caller input once
//! - **Sort**: `SortableFields` maps field names to `SortValue` extractors
//! - **Pipeline**: `search_items` runs filter -> sort -> paginate -> wrap,
//!   with the filter supplied by a `SearchPolicy`
//! - **Result**: `SearchResult` carries the page plus pagination metadata
//!
//! # Example
//!
//! ```ignore
//! use catalog_core::domain::search::{SearchParams, SearchParamsProps};
//!
//! let params = SearchParams::new(
//!     SearchParamsProps::new()
//!         .page(2)
//!         .per_page(10)
//!         .sort("name")
//!         .sort_dir("asc")
//!         .filter("movie".to_string()),
//! );
//! let result = repository.search(&params).await?;
//! println!("{} of {}", result.items().len(), result.total());
//! ```

pub mod params;
pub mod pipeline;
pub mod result;
pub mod sort;

pub use params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchFilter, SearchParams, SearchParamsProps, SortDirection,
};
pub use pipeline::{SearchPolicy, search_items};
pub use result::SearchResult;
pub use sort::{FieldAccessor, SortValue, SortableFields};
