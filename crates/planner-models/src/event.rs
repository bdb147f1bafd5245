//! Event types for Planner.
//!
//! An event is the unit everything else operates on: the reducer mutates
//! lists of them, the views filter and sort them, and the stores persist
//! them as one JSON blob.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{EventId, UserId};

/// Visibility of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Privacy {
    /// Anyone can see the event.
    #[default]
    Public,
    /// Only invited attendees can see the event.
    Private,
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privacy::Public => write!(f, "public"),
            Privacy::Private => write!(f, "private"),
        }
    }
}

/// An attendee's response to an event invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RsvpStatus {
    Yes,
    No,
    /// Invited but undecided. The default for a fresh invitation.
    #[default]
    Maybe,
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsvpStatus::Yes => write!(f, "Yes"),
            RsvpStatus::No => write!(f, "No"),
            RsvpStatus::Maybe => write!(f, "Maybe"),
        }
    }
}

/// How an event repeats, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

/// Someone invited to an event, keyed by email within that event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address, unique within the event's attendee list.
    pub email: String,
    /// Current RSVP response.
    pub status: RsvpStatus,
}

impl Attendee {
    /// Creates a new attendee with the default `Maybe` status.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: RsvpStatus::default(),
        }
    }

    /// Creates an attendee with an explicit status.
    pub fn with_status(email: impl Into<String>, status: RsvpStatus) -> Self {
        Self {
            email: email.into(),
            status,
        }
    }
}

/// A planned event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, generated fresh before the event enters the list.
    pub id: EventId,

    /// Title of the event.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Calendar date of the event.
    pub date: NaiveDate,

    /// Start time on that date.
    pub start_time: NaiveTime,

    /// End time, strictly after `start_time`.
    pub end_time: NaiveTime,

    /// Location (city, address, or "Online").
    pub location: String,

    /// Specific venue within the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// Public or private visibility.
    #[serde(default)]
    pub privacy: Privacy,

    /// Category tag (e.g. "Conference", "Meetup", "Party").
    #[serde(default)]
    pub category: String,

    /// Color tag used by calendar views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Whether the event takes place online.
    #[serde(default)]
    pub online: bool,

    /// Meeting link for online events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,

    /// Optional upper bound on attendee count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Whether overflow signups beyond capacity should be tracked.
    #[serde(default)]
    pub waitlist: bool,

    /// Recurrence mode; `None` for one-off events.
    #[serde(default)]
    pub recurrence: Recurrence,

    /// Timezone label (e.g. "UTC", "Europe/Berlin").
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Ordered list of attendees, emails unique per event.
    #[serde(default)]
    pub attendees: Vec<Attendee>,

    /// Ordered list of co-host emails.
    #[serde(default)]
    pub co_hosts: Vec<String>,

    /// Ordered list of custom question strings asked on signup.
    #[serde(default)]
    pub custom_questions: Vec<String>,

    /// Optional image payload (data URL or path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// User who created the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,

    /// When the event record was created.
    pub created_at: DateTime<Utc>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Event {
    /// Creates a new event with the required fields and defaults elsewhere.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            description: String::new(),
            date,
            start_time,
            end_time,
            location: location.into(),
            venue: None,
            privacy: Privacy::default(),
            category: String::new(),
            color: None,
            online: false,
            meeting_link: None,
            capacity: None,
            waitlist: false,
            recurrence: Recurrence::default(),
            timezone: default_timezone(),
            attendees: Vec::new(),
            co_hosts: Vec::new(),
            custom_questions: Vec::new(),
            image: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    /// Returns the attendee with the given email, if invited.
    pub fn attendee(&self, email: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.email == email)
    }

    /// Returns true if an attendee with this email is already invited.
    pub fn has_attendee(&self, email: &str) -> bool {
        self.attendee(email).is_some()
    }

    /// Number of attendees.
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Returns true if the event repeats.
    pub fn is_recurring(&self) -> bool {
        self.recurrence != Recurrence::None
    }

    /// Returns true if the event date is before the given day.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Returns true if capacity is set and reached.
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|cap| self.attendees.len() >= cap as usize)
    }
}
