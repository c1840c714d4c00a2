//! Session route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use gatherly_core::{Email, SessionId};

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Session creation form.
#[derive(Debug, Deserialize)]
pub struct CreateSessionForm {
    pub email: String,
    pub full_name: String,
}

/// Activity-touch response.
#[derive(Debug, Serialize)]
pub struct TouchResponse {
    pub touched: bool,
}

/// Create a session, ending any prior active session for the email.
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<CreateSessionForm>,
) -> Result<(StatusCode, Json<Session>)> {
    let email = Email::parse(&form.email).map_err(AuthError::from)?;
    let session = state.sessions().create_session(email, &form.full_name);
    tracing::info!(session_id = %session.id, "session created");
    Ok((StatusCode::CREATED, Json(session)))
}

/// Most recently created session, if still active.
pub async fn current(State(state): State<AppState>) -> Result<Json<Session>> {
    state
        .sessions()
        .current_session()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no current session".to_owned()))
}

/// All active sessions.
pub async fn active(State(state): State<AppState>) -> Json<Vec<Session>> {
    Json(state.sessions().list_active())
}

/// Show one session; inactive sessions read as absent.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<Session>> {
    state
        .sessions()
        .get_session(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))
}

/// Update a session's last-activity time.
pub async fn touch(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Json<TouchResponse> {
    Json(TouchResponse {
        touched: state.sessions().touch_activity(id),
    })
}

/// End a session.
pub async fn end(State(state): State<AppState>, Path(id): Path<SessionId>) -> Result<StatusCode> {
    state.sessions().end_session(id)?;
    Ok(StatusCode::NO_CONTENT)
}
