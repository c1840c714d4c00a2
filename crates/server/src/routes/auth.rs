//! Authentication route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use gatherly_core::{Email, UserId};

use crate::error::Result;
use crate::models::{Credential, NewAccount};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for the email existence check.
#[derive(Debug, Deserialize)]
pub struct EmailExistsQuery {
    pub email: String,
}

/// Account payload returned to clients.
///
/// Deliberately omits the password digest.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: UserId,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub company: String,
    pub job_title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Credential> for AccountResponse {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.id,
            email: credential.email,
            first_name: credential.first_name,
            last_name: credential.last_name,
            phone: credential.phone,
            date_of_birth: credential.date_of_birth,
            company: credential.company,
            job_title: credential.job_title,
            created_at: credential.created_at,
        }
    }
}

/// Email existence response.
#[derive(Debug, Serialize)]
pub struct EmailExistsResponse {
    pub exists: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// Register a new account credential.
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let email = Email::parse(&form.email).map_err(AuthError::from)?;
    let account = NewAccount {
        email,
        password: SecretString::from(form.password),
        first_name: form.first_name,
        last_name: form.last_name,
        phone: form.phone,
        date_of_birth: form.date_of_birth,
        company: form.company,
        job_title: form.job_title,
    };

    let credential = AuthService::new(state.credentials()).register(account)?;
    tracing::info!(user_id = %credential.id, "account registered");
    Ok((StatusCode::CREATED, Json(credential.into())))
}

/// Verify email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<AccountResponse>> {
    let credential = state.perf().time("login", || {
        AuthService::new(state.credentials()).login(&form.email, &form.password)
    })?;
    Ok(Json(credential.into()))
}

/// Case-insensitive email existence check.
pub async fn email_exists(
    State(state): State<AppState>,
    Query(query): Query<EmailExistsQuery>,
) -> Result<Json<EmailExistsResponse>> {
    let exists = AuthService::new(state.credentials()).email_exists(&query.email)?;
    Ok(Json(EmailExistsResponse { exists }))
}
