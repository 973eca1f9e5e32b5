//! Route guard: decides whether a navigable region may render.

use crate::policy::RequiredRoles;
use crate::session::SessionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    AuthenticatedAllowed,
    AuthenticatedDenied,
}

/// What the caller should do with a navigation. Denial is a redirect, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGuardDecision {
    Allow,
    /// Carries the requested location so sign-in can return to it.
    RedirectLogin { from: String },
    /// Carries the requested location for diagnostics.
    RedirectUnauthorized { from: String },
}

impl GuardState {
    pub fn classify(required: &RequiredRoles, session: &SessionSnapshot) -> Self {
        if session.loading {
            return GuardState::Loading;
        }
        match session.role() {
            None => GuardState::Unauthenticated,
            Some(role) if required.permits(role) => GuardState::AuthenticatedAllowed,
            Some(_) => GuardState::AuthenticatedDenied,
        }
    }

    /// `None` while loading: render a neutral "checking" state instead.
    pub fn decision(self, location: &str) -> Option<RouteGuardDecision> {
        match self {
            GuardState::Loading => None,
            GuardState::Unauthenticated => Some(RouteGuardDecision::RedirectLogin {
                from: location.to_string(),
            }),
            GuardState::AuthenticatedAllowed => Some(RouteGuardDecision::Allow),
            GuardState::AuthenticatedDenied => Some(RouteGuardDecision::RedirectUnauthorized {
                from: location.to_string(),
            }),
        }
    }
}

pub fn evaluate(
    required: &RequiredRoles,
    session: &SessionSnapshot,
    location: &str,
) -> Option<RouteGuardDecision> {
    let state = GuardState::classify(required, session);
    let decision = state.decision(location);
    match &decision {
        Some(RouteGuardDecision::Allow) => tracing::debug!(location, "Route allowed"),
        Some(RouteGuardDecision::RedirectLogin { .. }) => {
            tracing::info!(location, "No session; redirecting to sign-in")
        }
        Some(RouteGuardDecision::RedirectUnauthorized { .. }) => tracing::info!(
            location,
            role = ?session.role(),
            "Role not permitted; redirecting to unauthorized"
        ),
        None => tracing::debug!(location, "Session still loading; deferring decision"),
    }
    decision
}
