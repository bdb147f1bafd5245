//! Event filtering for list views.

use chrono::NaiveDate;
use planner_models::{Event, Privacy};

/// Filter criteria for the event list.
///
/// All set predicates must hold for an event to match (conjunctive).
/// Events dated before `today` are excluded unless `include_past` is set.
#[derive(Debug, Clone)]
pub struct EventFilter {
    /// Case-insensitive substring over title, description, and location.
    pub search: Option<String>,
    /// Exact category tag.
    pub category: Option<String>,
    /// Exact privacy value.
    pub privacy: Option<Privacy>,
    /// Show events dated before `today`.
    pub include_past: bool,
    /// The cutoff day for the past check.
    pub today: NaiveDate,
}

impl EventFilter {
    /// Creates an empty filter with the past cutoff at the given day.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            search: None,
            category: None,
            privacy: None,
            include_past: false,
            today,
        }
    }

    /// Sets the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the privacy filter.
    pub fn with_privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = Some(privacy);
        self
    }

    /// Includes events dated before today.
    pub fn with_past(mut self) -> Self {
        self.include_past = true;
        self
    }

    /// Returns true if the event matches this filter.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(ref term) = self.search {
            let term = term.trim().to_lowercase();
            if !term.is_empty() {
                let hit = event.title.to_lowercase().contains(&term)
                    || event.description.to_lowercase().contains(&term)
                    || event.location.to_lowercase().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        if let Some(ref category) = self.category {
            if event.category != *category {
                return false;
            }
        }

        if let Some(privacy) = self.privacy {
            if event.privacy != privacy {
                return false;
            }
        }

        if !self.include_past && event.is_past(self.today) {
            return false;
        }

        true
    }

    /// Applies the filter to a list, keeping original order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
