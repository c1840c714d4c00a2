//! Attendance route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use gatherly_core::{EventId, UserId};

use crate::error::{AppError, Result};
use crate::models::{AttendanceStats, EventRegistration};
use crate::state::AppState;

/// Registration form.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub user_id: UserId,
}

/// Checked-in count response.
#[derive(Debug, Serialize)]
pub struct AttendanceCountResponse {
    pub checked_in: usize,
}

/// Register a user for an event.
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<EventRegistration>)> {
    let registration = state.perf().time("register_for_event", || {
        state
            .attendance()
            .register_for_event(form.user_id, EventId::new(event_id))
    })?;
    tracing::info!(
        user_id = %registration.user_id,
        event_id = %registration.event_id,
        "registered for event"
    );
    Ok((StatusCode::CREATED, Json(registration)))
}

/// Check a registered user in.
pub async fn check_in(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i32, UserId)>,
) -> Result<StatusCode> {
    state
        .attendance()
        .check_in(user_id, EventId::new(event_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a registered user as a no-show.
pub async fn no_show(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i32, UserId)>,
) -> Result<StatusCode> {
    state
        .attendance()
        .mark_no_show(user_id, EventId::new(event_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// The registration for one (user, event) pair.
pub async fn show(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i32, UserId)>,
) -> Result<Json<EventRegistration>> {
    state
        .attendance()
        .get_registration(user_id, EventId::new(event_id))
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "registration for user {user_id} at event {event_id}"
            ))
        })
}

/// An event's registrations, oldest first.
pub async fn event_registrations(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Json<Vec<EventRegistration>> {
    Json(
        state
            .attendance()
            .get_event_registrations(EventId::new(event_id)),
    )
}

/// Checked-in count for an event.
pub async fn attendance_count(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Json<AttendanceCountResponse> {
    Json(AttendanceCountResponse {
        checked_in: state
            .attendance()
            .get_event_attendance_count(EventId::new(event_id)),
    })
}

/// A user's registrations, newest first.
pub async fn user_registrations(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<EventRegistration>> {
    Json(state.attendance().get_user_registrations(user_id))
}

/// Every registration on record.
pub async fn index(State(state): State<AppState>) -> Json<Vec<EventRegistration>> {
    Json(state.attendance().list_all())
}

/// Aggregate attendance counters.
pub async fn stats(State(state): State<AppState>) -> Json<AttendanceStats> {
    Json(state.attendance().get_stats())
}
