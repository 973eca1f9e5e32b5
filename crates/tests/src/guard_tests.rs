use access::nav;
use access::{evaluate, required_roles, GuardState, RequiredRoles, RouteGuardDecision, SessionSnapshot};
use shared_types::Role;

use crate::common::{signed_in, walkthrough_tree};

#[test]
fn loading_session_defers_the_decision() {
    let required = RequiredRoles::from_roles(&[Role::Admin]);
    assert_eq!(evaluate(&required, &SessionSnapshot::starting(), "/users/all"), None);
}

#[test]
fn anonymous_visitor_is_sent_to_sign_in_with_the_location() {
    let required = required_roles(&walkthrough_tree(), "/users/all");
    assert_eq!(
        evaluate(&required, &SessionSnapshot::signed_out(), "/users/all"),
        Some(RouteGuardDecision::RedirectLogin {
            from: "/users/all".into()
        })
    );
}

#[test]
fn permitted_role_is_allowed() {
    let required = required_roles(&walkthrough_tree(), "/users/all");
    assert_eq!(
        evaluate(&required, &signed_in(Role::Admin), "/users/all"),
        Some(RouteGuardDecision::Allow)
    );
}

#[test]
fn other_role_is_sent_to_unauthorized() {
    let required = required_roles(&walkthrough_tree(), "/users/all");
    assert_eq!(
        evaluate(&required, &signed_in(Role::Sales), "/users/all"),
        Some(RouteGuardDecision::RedirectUnauthorized {
            from: "/users/all".into()
        })
    );
}

#[test]
fn unrestricted_pages_admit_the_fallback_role() {
    let required = required_roles(nav::roots(), "/settings");
    assert_eq!(
        GuardState::classify(&required, &signed_in(Role::User)),
        GuardState::AuthenticatedAllowed
    );
}

#[test]
fn pending_login_over_existing_identity_still_defers() {
    let mut snapshot = signed_in(Role::Admin);
    snapshot.loading = true;
    let required = required_roles(nav::roots(), "/clients/all");
    assert_eq!(GuardState::classify(&required, &snapshot), GuardState::Loading);
}
