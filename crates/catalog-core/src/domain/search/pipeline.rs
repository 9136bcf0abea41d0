//! The filter -> sort -> paginate -> wrap search pipeline

use tracing::debug;

use super::params::{SearchFilter, SearchParams};
use super::result::SearchResult;
use super::sort::SortableFields;

/// Per-collection search capabilities.
///
/// The filter is the one piece each concrete collection supplies; the
/// rest of the pipeline is shared by [`search_items`].
pub trait SearchPolicy<E>: Send + Sync {
    /// Filter value understood by [`SearchPolicy::apply_filter`]
    type Filter: SearchFilter;

    /// Fields permitted as sort keys
    fn sortable_fields(&self) -> &SortableFields<E>;

    /// Narrow `items` to those matching `filter`; `None` keeps everything.
    /// Must preserve the relative order of kept items.
    fn apply_filter<'a>(&self, items: Vec<&'a E>, filter: Option<&Self::Filter>) -> Vec<&'a E>;
}

/// Run a search over `items` without modifying them.
///
/// Out-of-range pages produce an empty page, never an error.
pub fn search_items<E, P>(items: &[E], params: &SearchParams<P::Filter>, policy: &P) -> SearchResult<E>
where
    E: Clone,
    P: SearchPolicy<E>,
{
    let filtered = policy.apply_filter(items.iter().collect(), params.filter());
    let total = filtered.len() as u64;

    let sorted = policy
        .sortable_fields()
        .sort(filtered, params.sort(), params.sort_dir());

    let page = paginate(sorted, params.page(), params.per_page());

    debug!(
        filtered = params.filter().is_some(),
        sort = ?params.sort(),
        total = total,
        page = params.page(),
        per_page = params.per_page(),
        returned = page.len(),
        "Search executed"
    );

    SearchResult::new(page, total, params.page(), params.per_page())
}

fn paginate<E: Clone>(items: Vec<&E>, page: u64, per_page: u64) -> Vec<E> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);

    items
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect()
}
