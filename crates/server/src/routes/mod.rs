//! HTTP route handlers.
//!
//! Each store operation maps to one JSON endpoint.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Health check
//!
//! # Events
//! GET    /events                          - Event listing
//! GET    /events/{id}                     - Event detail
//! POST   /events/cache/clear              - Invalidate lookup caches
//!
//! # Auth
//! POST   /auth/register                   - Create account credential
//! POST   /auth/login                      - Verify email + password
//! GET    /auth/email-exists?email=...     - Case-insensitive existence check
//!
//! # Users (profile directory)
//! POST   /users                           - Create profile
//! GET    /users                           - List profiles
//! GET    /users/{id}                      - Profile detail
//! PUT    /users/{id}                      - Replace profile
//! DELETE /users/{id}                      - Delete profile
//! GET    /users/{id}/registrations        - User's registrations, newest first
//!
//! # Sessions
//! POST   /sessions                        - Create session (ends prior active)
//! GET    /sessions/current                - Most recent active session
//! GET    /sessions/active                 - All active sessions
//! GET    /sessions/{id}                   - Session detail (active only)
//! POST   /sessions/{id}/touch             - Update last-activity time
//! DELETE /sessions/{id}                   - End session
//!
//! # Attendance
//! POST   /events/{id}/registrations                     - Register user for event
//! GET    /events/{id}/registrations/{user_id}           - Registration detail
//! POST   /events/{id}/registrations/{user_id}/check-in  - Registered -> CheckedIn
//! POST   /events/{id}/registrations/{user_id}/no-show   - Registered -> NoShow
//! GET    /events/{id}/registrations                     - Event registrations, oldest first
//! GET    /events/{id}/attendance                        - Checked-in count
//! GET    /registrations                                 - All registrations
//! GET    /registrations/stats                           - Aggregate counters
//! ```

pub mod attendance;
pub mod auth;
pub mod events;
pub mod sessions;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the event routes router.
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(events::index))
        .route("/cache/clear", post(events::clear_cache))
        .route("/{id}", get(events::show))
        .route(
            "/{id}/registrations",
            get(attendance::event_registrations).post(attendance::register),
        )
        .route("/{id}/registrations/{user_id}", get(attendance::show))
        .route(
            "/{id}/registrations/{user_id}/check-in",
            post(attendance::check_in),
        )
        .route(
            "/{id}/registrations/{user_id}/no-show",
            post(attendance::no_show),
        )
        .route("/{id}/attendance", get(attendance::attendance_count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/email-exists", get(auth::email_exists))
}

/// Create the user directory routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route(
            "/{id}",
            get(users::show).put(users::update).delete(users::remove),
        )
        .route("/{id}/registrations", get(attendance::user_registrations))
}

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create))
        .route("/current", get(sessions::current))
        .route("/active", get(sessions::active))
        .route("/{id}", get(sessions::show).delete(sessions::end))
        .route("/{id}/touch", post(sessions::touch))
}

/// Create the ledger-wide registration routes router.
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(attendance::index))
        .route("/stats", get(attendance::stats))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/events", event_routes())
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/sessions", session_routes())
        .nest("/registrations", registration_routes())
}
