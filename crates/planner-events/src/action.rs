//! Actions accepted by the event reducer.

use planner_models::{Attendee, Event, EventId, RsvpStatus};

/// The five mutations the event list supports.
///
/// Callers supply a fresh id (via `EventBuilder`) before dispatching an
/// `Add`; duplicate event ids therefore cannot occur.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAction {
    /// Append a new event to the list.
    Add(Event),

    /// Replace the event whose id matches the payload's id.
    Update(Event),

    /// Remove the event with the given id.
    Delete(EventId),

    /// Append an attendee to the named event, unless the email is
    /// already present.
    AddAttendee {
        event_id: EventId,
        attendee: Attendee,
    },

    /// Overwrite the RSVP status of an existing attendee.
    UpdateAttendeeStatus {
        event_id: EventId,
        email: String,
        status: RsvpStatus,
    },
}
