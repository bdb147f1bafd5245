//! Request bodies and query parameters.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Optional role ("user" or "admin"); defaults to user.
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /api/events` and `PUT /api/events/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    #[serde(default)]
    pub venue: Option<String>,
    /// "public" or "private"; defaults to public.
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub waitlist: bool,
    /// "none", "daily", "weekly", or "monthly"; defaults to none.
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub co_hosts: Vec<String>,
    #[serde(default)]
    pub custom_questions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Body of `POST /api/events/:id/attendees`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddAttendeeRequest {
    pub email: String,
    /// Optional initial status ("Yes", "No", "Maybe"); defaults to Maybe.
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `POST /api/events/:id/rsvp`.
#[derive(Debug, Clone, Deserialize)]
pub struct RsvpRequest {
    pub email: String,
    pub status: String,
}

/// Query parameters of `GET /api/events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListQuery {
    /// Substring over title, description, and location.
    pub search: Option<String>,
    /// Exact category tag.
    pub category: Option<String>,
    /// "public" or "private".
    pub privacy: Option<String>,
    /// Include events dated before today.
    pub include_past: Option<bool>,
    /// "date", "title", "attendees", or "created".
    pub sort: Option<String>,
    /// "asc" or "desc".
    pub order: Option<String>,
    /// 1-based page index.
    pub page: Option<usize>,
    /// Page size, clamped to the offered set.
    pub page_size: Option<usize>,
}
