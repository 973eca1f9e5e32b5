//! Session state: who is signed in, fed by the identity provider.
//!
//! All transitions of the `{identity, loading}` pair go through one mutex
//! that is never held across an `.await`. Two counters keep slow async work
//! from overwriting newer truth:
//!
//! - `epoch` is bumped on every sign-out; a login started in an older epoch
//!   must not commit.
//! - `event_seq` is bumped on every identity event, committed sign-in and
//!   sign-out; an event's role resolution commits only if nothing newer
//!   happened meanwhile.
//!
//! Providers report their own successful sign-ins back through the
//! subscription. Events for the principal a sign-in is resolving, or for
//! the identity already committed, are acknowledged without a second
//! profile lookup.

use crate::provider::{IdentityProvider, Principal, ProfileStore};
use shared_types::{AuthError, Identity, Role};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// An atomic copy of the session as consumers see it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    /// True until the first identity outcome and while a login is pending.
    pub loading: bool,
    /// Non-fatal condition worth showing, e.g. the fallback role was applied.
    pub notice: Option<AuthError>,
}

impl SessionSnapshot {
    /// State at app start, before the provider has reported.
    pub fn starting() -> Self {
        Self {
            identity: None,
            loading: true,
            notice: None,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(identity: Identity, notice: Option<AuthError>) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
            notice,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}

struct SessionInner {
    snapshot: SessionSnapshot,
    epoch: u64,
    event_seq: u64,
    /// Principal id whose role a `login` call is currently resolving.
    signing_in: Option<String>,
}

pub struct Session<P, S> {
    provider: P,
    profiles: S,
    inner: Mutex<SessionInner>,
    updates: watch::Sender<SessionSnapshot>,
}

impl<P: IdentityProvider, S: ProfileStore> Session<P, S> {
    pub fn new(provider: P, profiles: S) -> Self {
        let (updates, _) = watch::channel(SessionSnapshot::starting());
        Self {
            provider,
            profiles,
            inner: Mutex::new(SessionInner {
                snapshot: SessionSnapshot::starting(),
                epoch: 0,
                event_seq: 0,
                signing_in: None,
            }),
            updates,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn profiles(&self) -> &S {
        &self.profiles
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.lock().snapshot.identity.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().snapshot.loading
    }

    /// Every committed snapshot, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    /// Feed provider subscription events into the session until the
    /// provider drops its sender. The provider's current value counts as
    /// the first event, which is what ends the start-up `loading` phase.
    pub async fn watch_identity(&self) {
        let mut changes = self.provider.subscribe();
        loop {
            let principal = changes.borrow_and_update().clone();
            self.on_identity_changed(principal).await;
            if changes.changed().await.is_err() {
                tracing::debug!("Identity provider closed its subscription");
                break;
            }
        }
    }

    /// Apply an identity event from the provider.
    pub async fn on_identity_changed(&self, principal: Option<Principal>) {
        let Some(principal) = principal else {
            let mut inner = self.lock();
            inner.epoch += 1;
            inner.event_seq += 1;
            inner.snapshot = SessionSnapshot::signed_out();
            self.publish(&inner);
            tracing::debug!("Identity provider reports no session");
            return;
        };

        let (epoch, seq) = {
            let mut inner = self.lock();
            inner.event_seq += 1;
            let committed = inner
                .snapshot
                .identity
                .as_ref()
                .is_some_and(|identity| identity.id == principal.id);
            if committed || inner.signing_in.as_deref() == Some(principal.id.as_str()) {
                tracing::debug!(user_id = %principal.id, "Identity event matches current session");
                return;
            }
            (inner.epoch, inner.event_seq)
        };

        let (identity, notice) = self.resolve(principal).await;

        let mut inner = self.lock();
        if inner.epoch != epoch || inner.event_seq != seq {
            tracing::debug!(user_id = %identity.id, "Discarding superseded identity event");
            return;
        }
        tracing::info!(user_id = %identity.id, role = %identity.role, "Session restored");
        inner.snapshot = SessionSnapshot::signed_in(identity, notice);
        self.publish(&inner);
    }

    /// Sign in with email and password.
    ///
    /// Never panics and never leaves `loading` stuck: every path either
    /// commits an identity, clears `loading`, or was overtaken by a
    /// sign-out that already cleared it.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let epoch = {
            let mut inner = self.lock();
            inner.snapshot.loading = true;
            inner.snapshot.notice = None;
            self.publish(&inner);
            inner.epoch
        };

        let principal = match self.provider.sign_in_with_password(email, password).await {
            Ok(principal) => principal,
            Err(err) => {
                let err = AuthError::from(err);
                tracing::warn!(email, kind = err.kind(), error = %err, "Sign-in rejected");
                let mut inner = self.lock();
                if inner.epoch == epoch {
                    inner.snapshot.loading = false;
                    self.publish(&inner);
                }
                return Err(err);
            }
        };

        {
            let mut inner = self.lock();
            if inner.epoch == epoch {
                inner.signing_in = Some(principal.id.clone());
            }
        }

        let (identity, notice) = self.resolve(principal).await;

        let mut inner = self.lock();
        if inner.signing_in.as_deref() == Some(identity.id.as_str()) {
            inner.signing_in = None;
        }
        if inner.epoch != epoch {
            tracing::info!(user_id = %identity.id, "Sign-in finished after sign-out; discarding");
            return Err(AuthError::Superseded);
        }
        // Identity events still resolving started before this commit.
        inner.event_seq += 1;
        tracing::info!(user_id = %identity.id, email, role = %identity.role, "Signed in");
        inner.snapshot = SessionSnapshot::signed_in(identity.clone(), notice);
        self.publish(&inner);
        Ok(identity)
    }

    /// Clear the session now, then tell the provider best-effort.
    pub fn logout(&self) {
        {
            let mut inner = self.lock();
            inner.epoch += 1;
            inner.event_seq += 1;
            inner.signing_in = None;
            let user_id = inner.snapshot.identity.as_ref().map(|i| i.id.clone());
            inner.snapshot = SessionSnapshot::signed_out();
            self.publish(&inner);
            tracing::info!(user_id = ?user_id, "Signed out");
        }
        if let Err(err) = self.provider.sign_out() {
            tracing::warn!(error = %err, "Remote sign-out failed; local session already cleared");
        }
    }

    /// Attach a role to a principal. Profile failures never block sign-in:
    /// they resolve to the least-privileged role plus a notice.
    async fn resolve(&self, principal: Principal) -> (Identity, Option<AuthError>) {
        match self.profiles.get_profile(&principal).await {
            Ok(profile) => (principal.into_identity(profile.role), None),
            Err(err) => {
                tracing::warn!(
                    user_id = %principal.id,
                    error = %err,
                    "Profile lookup failed; applying least-privileged role"
                );
                (
                    principal.into_identity(Role::User),
                    Some(AuthError::ProfileLookupFailed),
                )
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &SessionInner) {
        self.updates.send_replace(inner.snapshot.clone());
    }
}
