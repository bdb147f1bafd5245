//! Pagination for list views.

use planner_models::Event;

/// Page sizes the list controls offer.
pub const PAGE_SIZES: [usize; 4] = [6, 9, 12, 24];

/// Page size used when a requested size is not in [`PAGE_SIZES`].
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of a filtered and sorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Events on this page, in list order.
    pub items: Vec<Event>,
    /// 1-based page index actually returned.
    pub page: usize,
    /// Page size used.
    pub page_size: usize,
    /// Total events across all pages.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
}

/// Clamps a requested page size to the enumerated set.
///
/// Used by [`crate::ListControls`] and the API layer; `paginate` itself
/// slices at any size so callers with fixed layouts are not constrained.
pub fn clamp_page_size(requested: usize) -> usize {
    if PAGE_SIZES.contains(&requested) {
        requested
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// Returns the requested 1-based page of the list.
///
/// Page 0 is treated as page 1; a page past the end comes back empty with
/// the totals intact so the caller can reset its controls.
pub fn paginate(events: &[Event], page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total = events.len();
    let total_pages = total.div_ceil(page_size).max(1);

    let start = (page - 1) * page_size;
    let items = events
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}
