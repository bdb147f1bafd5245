//! List view controls: filter + sort + pagination state in one place.
//!
//! The page index resets to 1 whenever any filter or sort control
//! changes, so a narrowed result set never starts on a page past its end.

use planner_models::{Event, Privacy};

use crate::filter::EventFilter;
use crate::page::{clamp_page_size, paginate, Page, DEFAULT_PAGE_SIZE};
use crate::sort::{sort_events, SortKey, SortOrder};

/// UI-facing state of the event list view.
#[derive(Debug, Clone)]
pub struct ListControls {
    filter: EventFilter,
    sort_key: SortKey,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
}

impl ListControls {
    /// Creates controls with the default sort (date ascending) and the
    /// default page size.
    pub fn new(filter: EventFilter) -> Self {
        Self {
            filter,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Sets the search term and resets the page.
    pub fn set_search(&mut self, search: Option<String>) {
        self.filter.search = search;
        self.page = 1;
    }

    /// Sets the category filter and resets the page.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.page = 1;
    }

    /// Sets the privacy filter and resets the page.
    pub fn set_privacy(&mut self, privacy: Option<Privacy>) {
        self.filter.privacy = privacy;
        self.page = 1;
    }

    /// Toggles showing past events and resets the page.
    pub fn set_include_past(&mut self, include_past: bool) {
        self.filter.include_past = include_past;
        self.page = 1;
    }

    /// Sets the sort controls and resets the page.
    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.sort_key = key;
        self.sort_order = order;
        self.page = 1;
    }

    /// Sets the page size (clamped to the offered set) and resets the page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = clamp_page_size(page_size);
        self.page = 1;
    }

    /// Moves to the given 1-based page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Computes the current page from the full event list.
    pub fn apply(&self, events: &[Event]) -> Page {
        let mut filtered = self.filter.apply(events);
        sort_events(&mut filtered, self.sort_key, self.sort_order);
        paginate(&filtered, self.page, self.page_size)
    }
}
