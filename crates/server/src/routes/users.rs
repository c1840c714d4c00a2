//! User directory route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use gatherly_core::UserId;

use crate::error::{AppError, Result};
use crate::models::{NewProfile, UserProfile};
use crate::state::AppState;

/// Create a profile.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewProfile>,
) -> Result<(StatusCode, Json<UserProfile>)> {
    let profile = state.users().register(new)?;
    tracing::info!(user_id = %profile.id, "profile created");
    Ok((StatusCode::CREATED, Json(profile)))
}

/// List all profiles.
pub async fn index(State(state): State<AppState>) -> Json<Vec<UserProfile>> {
    Json(state.users().list_all())
}

/// Show one profile.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserProfile>> {
    state
        .users()
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Replace a profile wholesale.
///
/// The path ID wins over any ID in the body; the creation timestamp is
/// preserved from the stored profile.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(fields): Json<NewProfile>,
) -> Result<Json<UserProfile>> {
    let existing = state
        .users()
        .get_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    let profile = UserProfile {
        id,
        email: fields.email,
        first_name: fields.first_name,
        last_name: fields.last_name,
        phone: fields.phone,
        date_of_birth: fields.date_of_birth,
        company: fields.company,
        job_title: fields.job_title,
        receive_notifications: fields.receive_notifications,
        created_at: existing.created_at,
    };
    state.users().update(profile.clone())?;
    Ok(Json(profile))
}

/// Delete a profile.
pub async fn remove(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<StatusCode> {
    state.users().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
