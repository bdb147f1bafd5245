//! EventManager - thread-safe event list with persistence.
//!
//! Wraps the pure reducer with `Arc<RwLock<Vec<Event>>>` and an
//! `EventStore`. Every successful dispatch rewrites the full list to
//! storage; the atomic rename in the store keeps each rewrite crash-safe.

use std::sync::{Arc, RwLock};

use planner_models::{Attendee, Event, EventId, RsvpStatus};
use planner_persistence::EventStore;

use crate::action::EventAction;
use crate::error::{EventError, Result};
use crate::reducer::reduce;
use crate::validate::validate_event;

/// Thread-safe event list backed by the reducer and a store.
///
/// The reducer treats failed lookups as no-ops; the operation wrappers
/// here turn those cases into errors so callers can show a message
/// (`NotFound`, `DuplicateAttendee`) instead of succeeding silently.
pub struct EventManager {
    /// Persistence store for the full list.
    store: EventStore,
    /// In-memory event list, source of truth between saves.
    events: Arc<RwLock<Vec<Event>>>,
}

impl EventManager {
    /// Creates a manager with an empty list, ignoring any stored state.
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a manager rehydrated from the store.
    ///
    /// A missing file yields an empty list; a corrupt file surfaces the
    /// store's error instead of silently resetting.
    pub fn load(store: EventStore) -> Result<Self> {
        let events = store.load()?;
        Ok(Self {
            store,
            events: Arc::new(RwLock::new(events)),
        })
    }

    /// Applies an action and persists the resulting list.
    ///
    /// The in-memory list is only replaced after the write succeeds, so a
    /// failed save leaves state and storage consistent with each other.
    pub fn dispatch(&self, action: EventAction) -> Result<()> {
        let mut events = self
            .events
            .write()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))?;

        let next = reduce(&events, &action);
        self.store.save(&next)?;
        *events = next;
        Ok(())
    }

    /// Adds a validated event, returning its id.
    pub fn add_event(&self, event: Event) -> Result<EventId> {
        validate_event(&event)?;
        let id = event.id.clone();
        self.dispatch(EventAction::Add(event))?;
        Ok(id)
    }

    /// Replaces an existing event after validating the new draft.
    pub fn update_event(&self, event: Event) -> Result<()> {
        validate_event(&event)?;
        if self.get(&event.id).is_none() {
            return Err(EventError::NotFound(event.id.to_string()));
        }
        self.dispatch(EventAction::Update(event))
    }

    /// Deletes an event by id.
    pub fn delete_event(&self, id: &EventId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(EventError::NotFound(id.to_string()));
        }
        self.dispatch(EventAction::Delete(id.clone()))
    }

    /// Adds an attendee to an event.
    ///
    /// Rejects a duplicate email with a user-visible error; the reducer
    /// itself would simply leave the event unchanged.
    pub fn add_attendee(&self, event_id: &EventId, attendee: Attendee) -> Result<()> {
        let event = self
            .get(event_id)
            .ok_or_else(|| EventError::NotFound(event_id.to_string()))?;

        if event.has_attendee(&attendee.email) {
            return Err(EventError::DuplicateAttendee(attendee.email));
        }

        self.dispatch(EventAction::AddAttendee {
            event_id: event_id.clone(),
            attendee,
        })
    }

    /// Updates the RSVP status of an existing attendee.
    pub fn rsvp(&self, event_id: &EventId, email: &str, status: RsvpStatus) -> Result<()> {
        let event = self
            .get(event_id)
            .ok_or_else(|| EventError::NotFound(event_id.to_string()))?;

        if !event.has_attendee(email) {
            return Err(EventError::AttendeeNotFound(email.to_string()));
        }

        self.dispatch(EventAction::UpdateAttendeeStatus {
            event_id: event_id.clone(),
            email: email.to_string(),
            status,
        })
    }

    /// Gets an event by id.
    pub fn get(&self, id: &EventId) -> Option<Event> {
        self.events
            .read()
            .ok()
            .and_then(|events| events.iter().find(|e| e.id == *id).cloned())
    }

    /// Returns a snapshot of the full list in insertion order.
    pub fn list(&self) -> Vec<Event> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of events in the list.
    pub fn len(&self) -> usize {
        self.events.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
