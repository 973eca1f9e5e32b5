use access::SessionSnapshot;
use pretty_assertions::assert_eq;
use shared_types::{AuthError, Role};

use crate::common::{email_for, gated_session, gated_session_for, PASSWORD};

#[tokio::test]
async fn login_finishing_after_logout_is_discarded() {
    let (session, entered, release) = gated_session();

    let sign_in = session.login("admin@example.com", PASSWORD);
    let sign_out = async {
        entered.notified().await;
        assert!(session.is_loading());
        session.logout();
        release.notify_one();
    };
    let (result, ()) = tokio::join!(sign_in, sign_out);

    assert_eq!(result, Err(AuthError::Superseded));
    assert_eq!(session.snapshot(), SessionSnapshot::signed_out());
}

#[tokio::test]
async fn identity_event_resolving_after_logout_is_discarded() {
    let (session, entered, release) = gated_session();
    let principal = session.provider().principal_for("finance@example.com");

    let restore = session.on_identity_changed(principal);
    let sign_out = async {
        entered.notified().await;
        session.logout();
        release.notify_one();
    };
    tokio::join!(restore, sign_out);

    assert_eq!(session.snapshot(), SessionSnapshot::signed_out());
}

#[tokio::test]
async fn newer_identity_event_wins_over_slower_older_one() {
    let (session, entered, release) = gated_session();
    let finance = session.provider().principal_for("finance@example.com");
    let sales = session.provider().principal_for("sales@example.com");

    let older = session.on_identity_changed(finance);
    let driver = async {
        entered.notified().await;
        let newer = session.on_identity_changed(sales);
        let unblock = async {
            entered.notified().await;
            // Both lookups are parked; the order they resume in must not matter.
            release.notify_one();
            release.notify_one();
        };
        tokio::join!(newer, unblock);
    };
    tokio::join!(older, driver);

    assert_eq!(session.snapshot().role(), Some(Role::Sales));
}

#[tokio::test]
async fn login_without_interference_commits() {
    let (session, _entered, release) = gated_session();
    release.notify_one();
    let identity = session.login(&email_for(Role::Operations), PASSWORD).await.unwrap();
    assert_eq!(identity.role, Role::Operations);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn identity_event_older_than_a_login_does_not_overwrite_it() {
    let (session, entered, release) = gated_session_for(Role::Finance);
    let finance = session.provider().principal_for(&email_for(Role::Finance));

    let stale = session.on_identity_changed(finance);
    let sign_in = async {
        entered.notified().await;
        let identity = session
            .login(&email_for(Role::Sales), PASSWORD)
            .await
            .unwrap();
        assert_eq!(identity.role, Role::Sales);
        release.notify_one();
    };
    tokio::join!(stale, sign_in);

    assert_eq!(session.snapshot().role(), Some(Role::Sales));
}

#[tokio::test]
async fn failed_login_leaves_pending_identity_event_intact() {
    let (session, entered, release) = gated_session_for(Role::Finance);
    let finance = session.provider().principal_for(&email_for(Role::Finance));

    let restore = session.on_identity_changed(finance);
    let bad_sign_in = async {
        entered.notified().await;
        let err = session
            .login(&email_for(Role::Sales), "nope")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::WrongPassword);
        release.notify_one();
    };
    tokio::join!(restore, bad_sign_in);

    assert_eq!(session.snapshot().role(), Some(Role::Finance));
}
