//! Event route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use gatherly_core::{Event, EventId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Event payload with derived availability fields.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub is_full: bool,
    pub available_spots: u32,
    pub is_upcoming: bool,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let (is_full, available_spots, is_upcoming) =
            (event.is_full(), event.available_spots(), event.is_upcoming());
        Self {
            event,
            is_full,
            available_spots,
            is_upcoming,
        }
    }
}

/// List all events.
pub async fn index(State(state): State<AppState>) -> Json<Vec<EventResponse>> {
    let events = state.perf().time("list_events", || state.events().list_all());
    Json(events.into_iter().map(EventResponse::from).collect())
}

/// Show one event.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EventResponse>> {
    let id = EventId::new(id);
    state
        .events()
        .get_by_id(id)
        .map(EventResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("event {id}")))
}

/// Invalidate the event lookup caches.
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.events().clear_cache();
    StatusCode::NO_CONTENT
}
