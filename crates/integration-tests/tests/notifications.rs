//! Notification delivery tests.
//!
//! Subscribers receive session and registration notifications in order,
//! and a dropped subscriber never affects the publisher.

use gatherly_core::{Email, EventId, UserId};
use gatherly_integration_tests::test_state;
use gatherly_server::models::SessionEvent;

#[tokio::test]
async fn session_lifecycle_notifies_subscribers_in_order() {
    let state = test_state();
    let mut rx = state.sessions().subscribe();

    let email = Email::parse("sub@example.com").expect("valid");
    let first = state.sessions().create_session(email.clone(), "Sub");
    let second = state.sessions().create_session(email, "Sub");
    state
        .sessions()
        .end_session(second.id)
        .expect("end succeeds");

    match rx.recv().await.expect("created event") {
        SessionEvent::Created(s) => assert_eq!(s.id, first.id),
        SessionEvent::Ended(_) => panic!("expected Created for first session"),
    }
    // Creating the second session ends the first, then announces itself.
    match rx.recv().await.expect("ended event") {
        SessionEvent::Ended(id) => assert_eq!(id, first.id),
        SessionEvent::Created(_) => panic!("expected Ended for first session"),
    }
    match rx.recv().await.expect("created event") {
        SessionEvent::Created(s) => assert_eq!(s.id, second.id),
        SessionEvent::Ended(_) => panic!("expected Created for second session"),
    }
    match rx.recv().await.expect("ended event") {
        SessionEvent::Ended(id) => assert_eq!(id, second.id),
        SessionEvent::Created(_) => panic!("expected Ended for second session"),
    }
}

#[tokio::test]
async fn registration_changes_reach_subscribers() {
    let state = test_state();
    let mut rx = state.attendance().subscribe();

    let user = UserId::generate();
    state
        .attendance()
        .register_for_event(user, EventId::new(5))
        .expect("registration succeeds");

    let change = rx.recv().await.expect("change event");
    assert_eq!(change.user_id, user);
    assert_eq!(change.event_id, EventId::new(5));
}

#[tokio::test]
async fn dropped_subscriber_does_not_affect_publisher() {
    let state = test_state();
    let rx = state.sessions().subscribe();
    drop(rx);

    // Publishing into a channel with no receivers must still succeed.
    let email = Email::parse("solo@example.com").expect("valid");
    let session = state.sessions().create_session(email, "Solo");
    assert!(state.sessions().is_active(session.id));
}
