//! Sorting for list views.

use std::cmp::Ordering;

use planner_models::Event;

/// Key to sort the event list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Event date, then start time.
    #[default]
    Date,
    /// Title, case-insensitive.
    Title,
    /// Attendee count.
    Attendees,
    /// Record creation time.
    Created,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a
            .date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time)),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Attendees => a.attendee_count().cmp(&b.attendee_count()),
        SortKey::Created => a.created_at.cmp(&b.created_at),
    }
}

/// Sorts events by the given key and order.
///
/// The sort is stable, so ties keep their original relative order.
pub fn sort_events(events: &mut [Event], key: SortKey, order: SortOrder) {
    events.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
