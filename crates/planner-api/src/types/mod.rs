//! Request and response types for the API.

pub mod requests;
pub mod responses;

pub use requests::{
    AddAttendeeRequest, EventDraft, EventListQuery, LoginRequest, RegisterRequest, RsvpRequest,
};
pub use responses::{
    AuthResponse, CreatedResponse, EventListResponse, EventSummary, HealthResponse,
    SuccessResponse,
};
