//! Response bodies.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use planner_models::{Event, Privacy, UserSummary};

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Generic success message.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// Response of a successful login: the signed token plus the user.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Response of a creating POST: the new resource id.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub message: String,
}

/// One event in a list response.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub category: String,
    pub privacy: Privacy,
    pub online: bool,
    pub attendee_count: usize,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location.clone(),
            category: event.category.clone(),
            privacy: event.privacy,
            online: event.online,
            attendee_count: event.attendee_count(),
        }
    }
}

/// Response of `GET /api/events`.
#[derive(Debug, Clone, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventSummary>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}
