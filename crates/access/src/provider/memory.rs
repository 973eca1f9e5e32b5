//! In-process identity provider and profile store, used for demo mode and
//! tests.

use super::{IdentityProvider, Principal, Profile, ProfileError, ProfileStore, ProviderError};
use shared_types::{DemoUser, Role};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Consecutive wrong passwords before an account is throttled.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

struct Account {
    password: String,
    principal: Principal,
    failures: u32,
}

pub struct MemoryIdentityProvider {
    accounts: Mutex<HashMap<String, Account>>,
    current: watch::Sender<Option<Principal>>,
    next_id: AtomicU64,
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(HashMap::new()),
            current,
            next_id: AtomicU64::new(1),
        }
    }

    /// Register an account and return its principal.
    pub fn add_account(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Principal {
        let id = format!("uid-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let principal = Principal {
            id,
            email: email.trim().to_string(),
            display_name: display_name.map(str::to_string),
            photo_url: photo_url.map(str::to_string),
            access_token: None,
        };
        self.accounts().insert(
            email_key(email),
            Account {
                password: password.to_string(),
                principal: principal.clone(),
                failures: 0,
            },
        );
        principal
    }

    pub fn principal_for(&self, email: &str) -> Option<Principal> {
        self.accounts()
            .get(&email_key(email))
            .map(|account| account.principal.clone())
    }

    /// Report a principal (or none) as if the provider had restored or
    /// invalidated a persisted session on its own.
    pub fn restore(&self, principal: Option<Principal>) {
        self.current.send_replace(principal);
    }

    fn accounts(&self) -> MutexGuard<'_, HashMap<String, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_credentials(&self, email: &str, password: &str) -> Result<Principal, ProviderError> {
        if !is_plausible_email(email) {
            return Err(ProviderError::Code("auth/invalid-email".into()));
        }
        let mut accounts = self.accounts();
        let account = accounts
            .get_mut(&email_key(email))
            .ok_or_else(|| ProviderError::Code("auth/user-not-found".into()))?;
        if account.failures >= MAX_FAILED_ATTEMPTS {
            return Err(ProviderError::Code("auth/too-many-requests".into()));
        }
        if account.password != password {
            account.failures += 1;
            return Err(ProviderError::Code("auth/wrong-password".into()));
        }
        account.failures = 0;
        Ok(account.principal.clone())
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn subscribe(&self) -> watch::Receiver<Option<Principal>> {
        self.current.subscribe()
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderError> {
        let principal = self.check_credentials(email, password)?;
        self.current.send_replace(Some(principal.clone()));
        Ok(principal)
    }

    fn sign_out(&self) -> Result<(), ProviderError> {
        self.current.send_replace(None);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    roles: Mutex<HashMap<String, Role>>,
    outage: Mutex<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_role(&self, principal_id: &str, role: Role) {
        lock(&self.roles).insert(principal_id.to_string(), role);
    }

    pub fn remove(&self, principal_id: &str) {
        lock(&self.roles).remove(principal_id);
    }

    /// Make every lookup fail with `Unavailable(reason)`; `None` restores
    /// service.
    pub fn set_outage(&self, reason: Option<&str>) {
        *lock(&self.outage) = reason.map(str::to_string);
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, principal: &Principal) -> Result<Profile, ProfileError> {
        if let Some(reason) = lock(&self.outage).clone() {
            return Err(ProfileError::Unavailable(reason));
        }
        lock(&self.roles)
            .get(&principal.id)
            .map(|role| Profile { role: *role })
            .ok_or(ProfileError::NotFound)
    }
}

/// Build a provider and store seeded with `users`. Users without a role get
/// no profile document.
pub fn demo_backend(users: &[DemoUser]) -> (MemoryIdentityProvider, MemoryProfileStore) {
    let provider = MemoryIdentityProvider::new();
    let profiles = MemoryProfileStore::new();
    for user in users {
        let principal = provider.add_account(
            &user.email,
            &user.password,
            user.display_name.as_deref(),
            user.avatar_url.as_deref(),
        );
        if let Some(role) = user.role {
            profiles.set_role(&principal.id, role);
        }
    }
    tracing::info!(accounts = users.len(), "Seeded in-memory identity provider");
    (provider, profiles)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
