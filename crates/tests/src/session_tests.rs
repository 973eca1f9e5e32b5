use access::{IdentityProvider, SessionSnapshot};
use pretty_assertions::assert_eq;
use shared_types::{AuthError, Role};

use crate::common::{counting_session, email_for, test_session, PASSWORD};

#[tokio::test]
async fn each_role_signs_in_with_its_profile_role() {
    for role in Role::ALL {
        let session = test_session();
        let identity = session.login(&email_for(role), PASSWORD).await.unwrap();
        assert_eq!(identity.role, role);
        assert_eq!(session.snapshot().role(), Some(role));
    }
}

#[tokio::test]
async fn display_name_falls_back_to_email() {
    let session = test_session();
    let identity = session.login("sales@example.com", PASSWORD).await.unwrap();
    assert_eq!(identity.display_name, "sales");
}

#[tokio::test]
async fn wrong_password_maps_to_friendly_message() {
    let session = test_session();
    let err = session
        .login("admin@example.com", "nope")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::WrongPassword);
    assert_eq!(err.user_message(), "Incorrect password. Please try again.");
    assert_eq!(session.snapshot().identity, None);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn unknown_account_and_bad_email_are_distinguished() {
    let session = test_session();
    assert_eq!(
        session.login("ghost@example.com", PASSWORD).await,
        Err(AuthError::NoSuchUser)
    );
    assert_eq!(
        session.login("not-an-email", PASSWORD).await,
        Err(AuthError::InvalidEmail)
    );
}

#[tokio::test]
async fn repeated_failures_are_rate_limited() {
    let session = test_session();
    for _ in 0..5 {
        let _ = session.login("finance@example.com", "nope").await;
    }
    assert_eq!(
        session.login("finance@example.com", PASSWORD).await,
        Err(AuthError::RateLimited)
    );
}

#[tokio::test]
async fn missing_profile_falls_back_to_least_privileged_role() {
    let session = test_session();
    let identity = session.login("nobody@example.com", PASSWORD).await.unwrap();
    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.display_name, "No Body");
    assert_eq!(session.snapshot().notice, Some(AuthError::ProfileLookupFailed));
}

#[tokio::test]
async fn profile_outage_falls_back_without_failing_sign_in() {
    let session = test_session();
    session.profiles().set_outage(Some("backend down"));
    let identity = session.login("admin@example.com", PASSWORD).await.unwrap();
    assert_eq!(identity.role, Role::User);
    assert_eq!(session.snapshot().notice, Some(AuthError::ProfileLookupFailed));
}

#[tokio::test]
async fn successful_login_clears_previous_notice() {
    let session = test_session();
    session.login("nobody@example.com", PASSWORD).await.unwrap();
    session.login("admin@example.com", PASSWORD).await.unwrap();
    assert_eq!(session.snapshot().notice, None);
}

#[tokio::test]
async fn logout_is_immediate_and_tells_the_provider() {
    let session = test_session();
    session.login(&email_for(Role::Operations), PASSWORD).await.unwrap();
    let mut provider_events = session.provider().subscribe();
    assert!(provider_events.borrow_and_update().is_some());

    session.logout();

    assert_eq!(session.snapshot(), SessionSnapshot::signed_out());
    assert!(provider_events.borrow_and_update().is_none());
}

#[tokio::test]
async fn identity_listener_tracks_provider_events() {
    let session = test_session();
    let mut updates = session.subscribe();
    let principal = session.provider().principal_for("sales@example.com");

    let script = async {
        let snapshot = updates.wait_for(|s| !s.loading).await.unwrap().clone();
        assert_eq!(snapshot, SessionSnapshot::signed_out());

        session.provider().restore(principal.clone());
        let snapshot = updates.wait_for(|s| s.identity.is_some()).await.unwrap().clone();
        assert_eq!(snapshot.role(), Some(Role::Sales));

        session.provider().restore(None);
        let snapshot = updates.wait_for(|s| s.identity.is_none()).await.unwrap().clone();
        assert!(!snapshot.loading);
    };

    tokio::select! {
        _ = session.watch_identity() => panic!("provider closed its subscription"),
        _ = script => {}
    }
}

#[tokio::test]
async fn provider_echo_of_a_login_is_not_resolved_twice() {
    let session = counting_session();

    let script = async {
        session.login(&email_for(Role::Admin), PASSWORD).await.unwrap();
        tokio::task::yield_now().await;
    };

    tokio::select! {
        biased;
        _ = session.watch_identity() => panic!("provider closed its subscription"),
        _ = script => {}
    }

    assert_eq!(session.profiles().lookups(), 1);
    assert_eq!(session.snapshot().role(), Some(Role::Admin));
}
