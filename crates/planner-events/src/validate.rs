//! Draft validation, applied before an event reaches the reducer.
//!
//! Mirrors the submission checks of the event form: required fields must
//! be present, the end time must come after the start time, and online
//! events need a meeting link. Invalid drafts never reach storage.

use planner_models::Event;

use crate::error::{EventError, Result};

/// Checks an event draft, returning the first violation found.
pub fn validate_event(event: &Event) -> Result<()> {
    if event.title.trim().is_empty() {
        return Err(EventError::Validation("title is required".to_string()));
    }

    if event.location.trim().is_empty() {
        return Err(EventError::Validation("location is required".to_string()));
    }

    if event.end_time <= event.start_time {
        return Err(EventError::Validation(
            "end time must be after start time".to_string(),
        ));
    }

    if event.online && event.meeting_link.as_deref().unwrap_or("").trim().is_empty() {
        return Err(EventError::Validation(
            "online events require a meeting link".to_string(),
        ));
    }

    if event.capacity == Some(0) {
        return Err(EventError::Validation(
            "capacity must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use planner_models::EventBuilder;

    fn make_event() -> Event {
        EventBuilder::new(
            "Workshop",
            NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            "Studio",
        )
        .build()
    }

    #[test]
    fn test_valid_event_passes() {
        assert!(validate_event(&make_event()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut event = make_event();
        event.title = "  ".to_string();
        assert!(matches!(
            validate_event(&event),
            Err(EventError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_location_rejected() {
        let mut event = make_event();
        event.location = String::new();
        assert!(validate_event(&event).is_err());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut event = make_event();
        event.end_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(validate_event(&event).is_err());
    }

    #[test]
    fn test_end_equal_start_rejected() {
        let mut event = make_event();
        event.end_time = event.start_time;
        assert!(validate_event(&event).is_err());
    }

    #[test]
    fn test_online_without_link_rejected() {
        let mut event = make_event();
        event.online = true;
        assert!(validate_event(&event).is_err());

        event.meeting_link = Some("https://meet.example.com/x".to_string());
        assert!(validate_event(&event).is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut event = make_event();
        event.capacity = Some(0);
        assert!(validate_event(&event).is_err());
    }
}
