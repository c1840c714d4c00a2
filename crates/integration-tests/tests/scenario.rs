//! Cross-store user journey tests.

use gatherly_core::{EventId, RegistrationStatus};
use gatherly_integration_tests::{account, test_state};
use gatherly_server::services::auth::{AuthError, AuthService};

#[test]
fn full_attendee_journey() {
    let state = test_state();
    let auth = AuthService::new(state.credentials());

    // Register an account and log in with it.
    let credential = auth
        .register(account("dana@example.com", "pw123456"))
        .expect("registration succeeds");
    let logged_in = auth
        .login("Dana@Example.com", "pw123456")
        .expect("login succeeds with case-insensitive email");
    assert_eq!(logged_in.id, credential.id);

    // Create a session after authentication.
    let session = state
        .sessions()
        .create_session(logged_in.email.clone(), "Dana Scully");
    assert!(state.sessions().is_active(session.id));
    assert_eq!(
        state.sessions().current_session().expect("current").id,
        session.id
    );

    // Browse events and register for one.
    let events = state.events().list_all();
    assert_eq!(events.len(), 15);
    let event_id = EventId::new(3);
    let before = state
        .events()
        .get_by_id(event_id)
        .expect("seed event")
        .registered_count;

    let registration = state
        .attendance()
        .register_for_event(credential.id, event_id)
        .expect("registration succeeds");
    assert_eq!(registration.status, RegistrationStatus::Registered);
    assert_eq!(
        state
            .events()
            .get_by_id(event_id)
            .expect("seed event")
            .registered_count,
        before + 1
    );

    // Check in at the door.
    state
        .attendance()
        .check_in(credential.id, event_id)
        .expect("check-in succeeds");
    assert_eq!(state.attendance().get_event_attendance_count(event_id), 1);

    // Log out.
    state
        .sessions()
        .end_session(session.id)
        .expect("end succeeds");
    assert!(!state.sessions().is_active(session.id));
    assert!(state.sessions().current_session().is_none());
}

#[test]
fn login_rejects_wrong_password() {
    let state = test_state();
    let auth = AuthService::new(state.credentials());
    auth.register(account("bob@example.com", "pw123456"))
        .expect("registration succeeds");

    assert!(matches!(
        auth.login("bob@example.com", "wrong-password"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn credential_and_profile_stores_are_independent() {
    let state = test_state();
    let auth = AuthService::new(state.credentials());
    auth.register(account("indy@example.com", "pw123456"))
        .expect("registration succeeds");

    // The directory has no entry until a profile is registered there.
    assert!(
        !state
            .users()
            .email_exists(&gatherly_core::Email::parse("indy@example.com").expect("valid"))
    );
}

#[test]
fn directory_update_roundtrip() {
    let state = test_state();
    let profile = state
        .users()
        .register(gatherly_server::models::NewProfile {
            email: gatherly_core::Email::parse("maya@example.com").expect("valid"),
            first_name: "Maya".to_owned(),
            last_name: "Chen".to_owned(),
            phone: "+1 555 0199".to_owned(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1995, 3, 2).expect("valid date"),
            company: String::new(),
            job_title: String::new(),
            receive_notifications: true,
        })
        .expect("profile registers");

    let mut updated = profile.clone();
    updated.company = "Chen Robotics".to_owned();
    updated.receive_notifications = false;
    state.users().update(updated.clone()).expect("update succeeds");

    let fetched = state.users().get_by_id(profile.id).expect("profile exists");
    assert_eq!(fetched.company, "Chen Robotics");
    assert!(!fetched.receive_notifications);
    assert_eq!(fetched.created_at, profile.created_at);
}

#[test]
fn seeded_event_fills_to_exact_capacity() {
    let state = test_state();
    let event_id = EventId::new(1); // capacity 500, seeded at 234

    // 266 distinct users fill the remaining spots.
    for _ in 0..266 {
        state
            .attendance()
            .register_for_event(gatherly_core::UserId::generate(), event_id)
            .expect("registration under capacity succeeds");
    }

    let event = state.events().get_by_id(event_id).expect("seed event");
    assert_eq!(event.registered_count, 500);
    assert!(event.is_full());

    // The 267th distinct user is turned away.
    assert!(
        state
            .attendance()
            .register_for_event(gatherly_core::UserId::generate(), event_id)
            .is_err()
    );
}
