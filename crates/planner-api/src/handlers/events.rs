//! Event CRUD, attendee, and listing handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;

use planner_models::{Attendee, Event, EventBuilder, EventId, Privacy, Recurrence, RsvpStatus};
use planner_views::{
    clamp_page_size, paginate, sort_events, EventFilter, SortKey, SortOrder, DEFAULT_PAGE_SIZE,
};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{
    AddAttendeeRequest, CreatedResponse, EventDraft, EventListQuery, EventListResponse,
    EventSummary, RsvpRequest, SuccessResponse,
};

/// GET /api/events - List events with filtering, sorting, and pagination.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<EventListResponse>> {
    let mut filter = EventFilter::new(Utc::now().date_naive());
    if let Some(search) = query.search {
        filter = filter.with_search(search);
    }
    if let Some(category) = query.category {
        filter = filter.with_category(category);
    }
    if let Some(ref privacy) = query.privacy {
        filter = filter.with_privacy(parse_privacy(privacy)?);
    }
    if query.include_past.unwrap_or(false) {
        filter = filter.with_past();
    }

    let sort_key = match query.sort.as_deref() {
        None => SortKey::default(),
        Some(s) => parse_sort(s)?,
    };
    let sort_order = match query.order.as_deref() {
        None => SortOrder::default(),
        Some(s) => parse_order(s)?,
    };

    let mut events = filter.apply(&state.events.list());
    sort_events(&mut events, sort_key, sort_order);

    let page_size = clamp_page_size(query.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
    let page = paginate(&events, query.page.unwrap_or(1), page_size);

    Ok(Json(EventListResponse {
        events: page.items.iter().map(EventSummary::from).collect(),
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
    }))
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>> {
    let event = state
        .events
        .get(&EventId::from(id.as_str()))
        .ok_or_else(|| ApiError::NotFound(format!("event not found: {}", id)))?;
    Ok(Json(event))
}

/// POST /api/events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let event = draft_to_event(draft)?;
    let id = state.events.add_event(event)?;

    info!("created event {}", id);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.to_string(),
            message: "event created".to_string(),
        }),
    ))
}

/// PUT /api/events/:id - Replace an existing event.
///
/// The id, creation timestamp, attendee list, and creator are preserved
/// from the stored record; everything else comes from the draft.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<SuccessResponse>> {
    let event_id = EventId::from(id.as_str());
    let existing = state
        .events
        .get(&event_id)
        .ok_or_else(|| ApiError::NotFound(format!("event not found: {}", id)))?;

    let mut event = draft_to_event(draft)?;
    event.id = existing.id;
    event.created_at = existing.created_at;
    event.created_by = existing.created_by;
    event.attendees = existing.attendees;

    state.events.update_event(event)?;
    Ok(Json(SuccessResponse {
        message: "event updated".to_string(),
    }))
}

/// DELETE /api/events/:id - Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    state.events.delete_event(&EventId::from(id.as_str()))?;

    info!("deleted event {}", id);

    Ok(Json(SuccessResponse {
        message: "event deleted".to_string(),
    }))
}

/// POST /api/events/:id/attendees - Add an attendee to an event.
pub async fn add_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddAttendeeRequest>,
) -> Result<(StatusCode, Json<SuccessResponse>)> {
    if req.email.trim().is_empty() {
        return Err(ApiError::BadRequest("email is required".to_string()));
    }
    let status = match req.status.as_deref() {
        None => RsvpStatus::default(),
        Some(s) => parse_status(s)?,
    };

    state.events.add_attendee(
        &EventId::from(id.as_str()),
        Attendee::with_status(req.email, status),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            message: "attendee added".to_string(),
        }),
    ))
}

/// POST /api/events/:id/rsvp - Update an attendee's RSVP status.
pub async fn rsvp(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RsvpRequest>,
) -> Result<Json<SuccessResponse>> {
    let status = parse_status(&req.status)?;
    state
        .events
        .rsvp(&EventId::from(id.as_str()), &req.email, status)?;

    Ok(Json(SuccessResponse {
        message: "rsvp updated".to_string(),
    }))
}

fn draft_to_event(draft: EventDraft) -> Result<Event> {
    let mut builder = EventBuilder::new(
        draft.title,
        draft.date,
        draft.start_time,
        draft.end_time,
        draft.location,
    )
    .description(draft.description);

    if let Some(ref privacy) = draft.privacy {
        builder = builder.privacy(parse_privacy(privacy)?);
    }
    if let Some(ref recurrence) = draft.recurrence {
        builder = builder.recurrence(parse_recurrence(recurrence)?);
    }
    if let Some(venue) = draft.venue {
        builder = builder.venue(venue);
    }
    if let Some(color) = draft.color {
        builder = builder.color(color);
    }
    if let Some(timezone) = draft.timezone {
        builder = builder.timezone(timezone);
    }
    if let Some(image) = draft.image {
        builder = builder.image(image);
    }
    if draft.online {
        builder = builder.online(draft.meeting_link.unwrap_or_default());
    }
    if let Some(capacity) = draft.capacity {
        builder = builder.capacity(capacity, draft.waitlist);
    }
    builder = builder.category(draft.category);
    for co_host in draft.co_hosts {
        builder = builder.co_host(co_host);
    }
    for question in draft.custom_questions {
        builder = builder.question(question);
    }

    Ok(builder.build())
}

fn parse_privacy(s: &str) -> Result<Privacy> {
    match s.to_lowercase().as_str() {
        "public" => Ok(Privacy::Public),
        "private" => Ok(Privacy::Private),
        other => Err(ApiError::BadRequest(format!("unknown privacy: {}", other))),
    }
}

fn parse_recurrence(s: &str) -> Result<Recurrence> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Recurrence::None),
        "daily" => Ok(Recurrence::Daily),
        "weekly" => Ok(Recurrence::Weekly),
        "monthly" => Ok(Recurrence::Monthly),
        other => Err(ApiError::BadRequest(format!(
            "unknown recurrence: {}",
            other
        ))),
    }
}

fn parse_status(s: &str) -> Result<RsvpStatus> {
    match s.to_lowercase().as_str() {
        "yes" => Ok(RsvpStatus::Yes),
        "no" => Ok(RsvpStatus::No),
        "maybe" => Ok(RsvpStatus::Maybe),
        other => Err(ApiError::BadRequest(format!(
            "unknown rsvp status: {}",
            other
        ))),
    }
}

fn parse_sort(s: &str) -> Result<SortKey> {
    match s.to_lowercase().as_str() {
        "date" => Ok(SortKey::Date),
        "title" => Ok(SortKey::Title),
        "attendees" => Ok(SortKey::Attendees),
        "created" => Ok(SortKey::Created),
        other => Err(ApiError::BadRequest(format!("unknown sort key: {}", other))),
    }
}

fn parse_order(s: &str) -> Result<SortOrder> {
    match s.to_lowercase().as_str() {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(ApiError::BadRequest(format!(
            "unknown sort order: {}",
            other
        ))),
    }
}
