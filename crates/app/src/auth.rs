use access::{Session, SessionSnapshot};
use dioxus::prelude::*;
use shared_types::{Identity, Role};
use std::sync::Arc;

#[cfg(feature = "rest")]
pub type AppSession =
    Session<access::provider::rest::RestIdentityProvider, access::provider::rest::RestProfileStore>;

#[cfg(not(feature = "rest"))]
pub type AppSession = Session<
    access::provider::memory::MemoryIdentityProvider,
    access::provider::memory::MemoryProfileStore,
>;

#[cfg(feature = "rest")]
fn build_session() -> AppSession {
    use access::provider::rest::{RestIdentityProvider, RestProfileStore};
    let identity = &access::config::config().identity;
    Session::new(
        RestIdentityProvider::new(identity),
        RestProfileStore::new(identity),
    )
}

#[cfg(not(feature = "rest"))]
fn build_session() -> AppSession {
    let (provider, profiles) =
        access::provider::memory::demo_backend(&access::config::config().demo_users);
    Session::new(provider, profiles)
}

/// Global authentication state: the session itself plus a reactive mirror
/// of its latest snapshot.
#[derive(Clone, Copy)]
pub struct AuthState {
    session: CopyValue<Arc<AppSession>>,
    pub snapshot: Signal<SessionSnapshot>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: CopyValue::new(Arc::new(build_session())),
            snapshot: Signal::new(SessionSnapshot::starting()),
        }
    }

    /// Start listening to the identity provider and mirroring session
    /// snapshots into the signal. Call once from the root component.
    pub fn start(&self) {
        tracing::info!(
            backend = if cfg!(feature = "rest") { "rest" } else { "memory" },
            "Starting session"
        );
        let session = self.session();
        let listener = session.clone();
        spawn(async move {
            listener.watch_identity().await;
        });

        let mut snapshot = self.snapshot;
        spawn(async move {
            let mut updates = session.subscribe();
            loop {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
                if updates.changed().await.is_err() {
                    tracing::debug!("Session update channel closed");
                    break;
                }
            }
        });
    }

    pub fn session(&self) -> Arc<AppSession> {
        Arc::clone(&self.session.read())
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.snapshot.read().identity.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.snapshot.read().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.read().identity.is_some()
    }

    /// Pull the committed state immediately instead of waiting for the
    /// mirror task.
    pub fn refresh(&mut self) {
        let latest = self.session().snapshot();
        self.snapshot.set(latest);
    }

    pub fn logout(&mut self) {
        self.session().logout();
        self.refresh();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if any.
pub fn use_role() -> Option<Role> {
    use_auth().role()
}

