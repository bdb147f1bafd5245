//! Derived views over the event list.
//!
//! Everything here is pure and recomputed on demand from the current
//! list; nothing in this crate is persisted.
//!
//! - [`EventFilter`] — conjunctive search/category/privacy/past predicate
//! - [`sort_events`] — stable sort by date, title, attendee count, or
//!   creation time
//! - [`paginate`] and [`ListControls`] — fixed page sizes, page resets
//!   when any control changes
//! - [`export_events`] — CSV, JSON, or plain-text rendering of a field
//!   subset

pub mod controls;
pub mod export;
pub mod filter;
pub mod page;
pub mod sort;

pub use controls::ListControls;
pub use export::{export_events, ExportError, ExportField, ExportFormat, DEFAULT_EXPORT_FIELDS};
pub use filter::EventFilter;
pub use page::{clamp_page_size, paginate, Page, DEFAULT_PAGE_SIZE, PAGE_SIZES};
pub use sort::{sort_events, SortKey, SortOrder};
