//! Builder patterns for complex types.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::event::{Attendee, Event, Privacy, Recurrence};
use crate::ids::{EventId, UserId};

/// Builder for creating Event instances with a fluent API.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    title: String,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    location: String,
    description: Option<String>,
    venue: Option<String>,
    privacy: Privacy,
    category: Option<String>,
    color: Option<String>,
    online: bool,
    meeting_link: Option<String>,
    capacity: Option<u32>,
    waitlist: bool,
    recurrence: Recurrence,
    timezone: Option<String>,
    attendees: Vec<Attendee>,
    co_hosts: Vec<String>,
    custom_questions: Vec<String>,
    image: Option<String>,
    created_by: Option<UserId>,
}

impl EventBuilder {
    /// Creates a new EventBuilder with the required fields.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            start_time,
            end_time,
            location: location.into(),
            description: None,
            venue: None,
            privacy: Privacy::default(),
            category: None,
            color: None,
            online: false,
            meeting_link: None,
            capacity: None,
            waitlist: false,
            recurrence: Recurrence::default(),
            timezone: None,
            attendees: Vec::new(),
            co_hosts: Vec::new(),
            custom_questions: Vec::new(),
            image: None,
            created_by: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the venue.
    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Sets the privacy.
    pub fn privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = privacy;
        self
    }

    /// Sets the category tag.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the color tag.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Marks the event as online with the given meeting link.
    pub fn online(mut self, meeting_link: impl Into<String>) -> Self {
        self.online = true;
        self.meeting_link = Some(meeting_link.into());
        self
    }

    /// Sets the capacity, optionally with a waitlist flag.
    pub fn capacity(mut self, capacity: u32, waitlist: bool) -> Self {
        self.capacity = Some(capacity);
        self.waitlist = waitlist;
        self
    }

    /// Sets the recurrence mode.
    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Sets the timezone label.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Adds an attendee.
    pub fn attendee(mut self, attendee: Attendee) -> Self {
        self.attendees.push(attendee);
        self
    }

    /// Adds a co-host email.
    pub fn co_host(mut self, email: impl Into<String>) -> Self {
        self.co_hosts.push(email.into());
        self
    }

    /// Adds a custom signup question.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.custom_questions.push(question.into());
        self
    }

    /// Sets the image payload.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the creating user.
    pub fn created_by(mut self, user_id: impl Into<UserId>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }

    /// Builds the event with a fresh id and creation timestamp.
    pub fn build(self) -> Event {
        Event {
            id: EventId::new(),
            title: self.title,
            description: self.description.unwrap_or_default(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            venue: self.venue,
            privacy: self.privacy,
            category: self.category.unwrap_or_default(),
            color: self.color,
            online: self.online,
            meeting_link: self.meeting_link,
            capacity: self.capacity,
            waitlist: self.waitlist,
            recurrence: self.recurrence,
            timezone: self.timezone.unwrap_or_else(|| "UTC".to_string()),
            attendees: self.attendees,
            co_hosts: self.co_hosts,
            custom_questions: self.custom_questions,
            image: self.image,
            created_by: self.created_by,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RsvpStatus;

    fn base_builder() -> EventBuilder {
        EventBuilder::new(
            "Rust Meetup",
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            "Amsterdam",
        )
    }

    #[test]
    fn test_builder_minimal() {
        let event = base_builder().build();
        assert_eq!(event.title, "Rust Meetup");
        assert_eq!(event.privacy, Privacy::Public);
        assert_eq!(event.timezone, "UTC");
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_builder_full() {
        let event = base_builder()
            .description("Monthly meetup")
            .venue("Pakhuis")
            .privacy(Privacy::Private)
            .category("Meetup")
            .color("#ff8800")
            .online("https://meet.example.com/rust")
            .capacity(80, true)
            .recurrence(Recurrence::Monthly)
            .timezone("Europe/Amsterdam")
            .attendee(Attendee::with_status("a@example.com", RsvpStatus::Yes))
            .co_host("host@example.com")
            .question("Dietary requirements?")
            .created_by("user-1")
            .build();

        assert_eq!(event.description, "Monthly meetup");
        assert_eq!(event.venue.as_deref(), Some("Pakhuis"));
        assert_eq!(event.privacy, Privacy::Private);
        assert!(event.online);
        assert_eq!(
            event.meeting_link.as_deref(),
            Some("https://meet.example.com/rust")
        );
        assert_eq!(event.capacity, Some(80));
        assert!(event.waitlist);
        assert!(event.is_recurring());
        assert_eq!(event.attendees.len(), 1);
        assert_eq!(event.co_hosts, vec!["host@example.com"]);
        assert_eq!(event.custom_questions.len(), 1);
        assert_eq!(event.created_by, Some(UserId::from("user-1")));
    }

    #[test]
    fn test_builder_generates_fresh_ids() {
        let a = base_builder().build();
        let b = base_builder().build();
        assert_ne!(a.id, b.id);
    }
}
