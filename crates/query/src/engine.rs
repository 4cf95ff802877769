use crate::error::{QueryError, Result};
use crate::state::QueryState;
use catalog_graph::MessageNode;

/// One page of results plus the pagination metadata the UI renders.
///
/// `total_pages` is at least 1 even for an empty result set, so pagination
/// controls stay stable. `current_page` is the effective (clamped) page;
/// callers feed it back into their state after a filter narrows results.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a MessageNode>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Evaluate a query state against an immutable node snapshot.
///
/// Filters apply in fixed order: category filter, then case-insensitive
/// substring search over display name and summary, then pagination. The
/// page slice keeps the snapshot's order; nothing is re-sorted, so the
/// same snapshot and state always return the same window.
pub fn query<'a, I>(nodes: I, state: &QueryState) -> Result<QueryPage<'a>>
where
    I: IntoIterator<Item = &'a MessageNode>,
{
    if state.page_size == 0 {
        return Err(QueryError::InvalidPageSize);
    }
    if state.page == 0 {
        return Err(QueryError::InvalidPage);
    }

    let needle = state.search.to_lowercase();
    let filtered: Vec<&MessageNode> = nodes
        .into_iter()
        .filter(|node| state.categories.is_empty() || state.categories.contains(&node.category))
        .filter(|node| needle.is_empty() || matches_search(node, &needle))
        .collect();

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(state.page_size).max(1);
    let current_page = state.page.min(total_pages);

    log::debug!(
        "query: search='{}', {total_items} matches, page {current_page}/{total_pages}",
        state.search
    );

    let start = (current_page - 1) * state.page_size;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(state.page_size)
        .collect();

    Ok(QueryPage {
        items,
        total_items,
        total_pages,
        current_page,
    })
}

fn matches_search(node: &MessageNode, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle) || node.summary.to_lowercase().contains(needle)
}
