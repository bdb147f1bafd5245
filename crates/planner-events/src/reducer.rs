//! The pure event reducer.
//!
//! `reduce` maps `(list, action)` to a new list without mutating its
//! input. Lookups that fail (unknown event id, unknown attendee email)
//! leave the list unchanged in content; user-visible errors for those
//! cases live in the manager, not here.

use planner_models::Event;

use crate::action::EventAction;

/// Applies an action to the event list, returning the new list.
pub fn reduce(events: &[Event], action: &EventAction) -> Vec<Event> {
    match action {
        EventAction::Add(event) => {
            let mut next = events.to_vec();
            next.push(event.clone());
            next
        }

        EventAction::Update(updated) => events
            .iter()
            .map(|event| {
                if event.id == updated.id {
                    updated.clone()
                } else {
                    event.clone()
                }
            })
            .collect(),

        EventAction::Delete(id) => events
            .iter()
            .filter(|event| event.id != *id)
            .cloned()
            .collect(),

        EventAction::AddAttendee { event_id, attendee } => events
            .iter()
            .map(|event| {
                if event.id != *event_id || event.has_attendee(&attendee.email) {
                    return event.clone();
                }
                let mut next = event.clone();
                next.attendees.push(attendee.clone());
                next
            })
            .collect(),

        EventAction::UpdateAttendeeStatus {
            event_id,
            email,
            status,
        } => events
            .iter()
            .map(|event| {
                if event.id != *event_id {
                    return event.clone();
                }
                let mut next = event.clone();
                for attendee in &mut next.attendees {
                    if attendee.email == *email {
                        attendee.status = *status;
                    }
                }
                next
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use planner_models::{Attendee, EventBuilder, EventId, RsvpStatus};

    fn make_event(title: &str) -> Event {
        EventBuilder::new(
            title,
            NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            "Library",
        )
        .build()
    }

    #[test]
    fn test_add_appends() {
        let events = vec![make_event("First")];
        let new = make_event("Second");

        let next = reduce(&events, &EventAction::Add(new.clone()));

        assert_eq!(next.len(), 2);
        assert_eq!(next[1], new);
        // Input untouched
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let original = vec![make_event("Keep")];
        let extra = make_event("Temp");
        let extra_id = extra.id.clone();

        let added = reduce(&original, &EventAction::Add(extra));
        let restored = reduce(&added, &EventAction::Delete(extra_id));

        assert_eq!(restored, original);
    }

    #[test]
    fn test_update_replaces_matching_id() {
        let mut target = make_event("Before");
        let other = make_event("Other");
        let events = vec![target.clone(), other.clone()];

        target.title = "After".to_string();
        let next = reduce(&events, &EventAction::Update(target.clone()));

        assert_eq!(next[0].title, "After");
        assert_eq!(next[1], other);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let events = vec![make_event("Only")];
        let stranger = make_event("Stranger");

        let next = reduce(&events, &EventAction::Update(stranger));

        assert_eq!(next, events);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let events = vec![make_event("Only")];

        let next = reduce(&events, &EventAction::Delete(EventId::from("evt-missing")));

        assert_eq!(next, events);
    }

    #[test]
    fn test_add_attendee() {
        let event = make_event("Party");
        let id = event.id.clone();
        let events = vec![event];

        let next = reduce(
            &events,
            &EventAction::AddAttendee {
                event_id: id,
                attendee: Attendee::new("guest@example.com"),
            },
        );

        assert_eq!(next[0].attendee_count(), 1);
        assert_eq!(next[0].attendees[0].status, RsvpStatus::Maybe);
        assert_eq!(events[0].attendee_count(), 0);
    }

    #[test]
    fn test_add_attendee_duplicate_email_is_noop() {
        let mut event = make_event("Party");
        event
            .attendees
            .push(Attendee::with_status("guest@example.com", RsvpStatus::Yes));
        let id = event.id.clone();
        let events = vec![event];

        let next = reduce(
            &events,
            &EventAction::AddAttendee {
                event_id: id,
                attendee: Attendee::new("guest@example.com"),
            },
        );

        // Idempotent: same attendee list, original status kept
        assert_eq!(next, events);
        assert_eq!(next[0].attendees[0].status, RsvpStatus::Yes);
    }

    #[test]
    fn test_update_attendee_status() {
        let mut event = make_event("Party");
        event.attendees.push(Attendee::new("guest@example.com"));
        let id = event.id.clone();
        let events = vec![event];

        let next = reduce(
            &events,
            &EventAction::UpdateAttendeeStatus {
                event_id: id,
                email: "guest@example.com".to_string(),
                status: RsvpStatus::No,
            },
        );

        assert_eq!(next[0].attendees[0].status, RsvpStatus::No);
    }

    #[test]
    fn test_update_status_unknown_email_is_noop() {
        let mut event = make_event("Party");
        event.attendees.push(Attendee::new("guest@example.com"));
        let id = event.id.clone();
        let events = vec![event];

        let next = reduce(
            &events,
            &EventAction::UpdateAttendeeStatus {
                event_id: id,
                email: "nobody@example.com".to_string(),
                status: RsvpStatus::Yes,
            },
        );

        assert_eq!(next, events);
    }

    #[test]
    fn test_update_status_unknown_event_is_noop() {
        let events = vec![make_event("Party")];

        let next = reduce(
            &events,
            &EventAction::UpdateAttendeeStatus {
                event_id: EventId::from("evt-missing"),
                email: "guest@example.com".to_string(),
                status: RsvpStatus::Yes,
            },
        );

        assert_eq!(next, events);
    }
}
