//! Narrow interfaces to the external identity provider and profile store.

pub mod memory;
#[cfg(feature = "rest")]
pub mod rest;

use shared_types::{display_name_from_email, AuthError, Identity, Role};
use std::fmt;
use std::future::Future;
use tokio::sync::watch;

/// An authenticated account as reported by the identity provider, before
/// any role is attached.
#[derive(Clone, PartialEq)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Bearer token for calls made on the principal's behalf.
    pub access_token: Option<String>,
}

impl Principal {
    pub fn into_identity(self, role: Role) -> Identity {
        let display_name = self
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| display_name_from_email(&self.email));
        Identity {
            id: self.id,
            email: self.email,
            display_name,
            role,
            avatar_url: self.photo_url,
        }
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("photo_url", &self.photo_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The part of a user's profile document the back office reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Provider-specific error code, e.g. `auth/wrong-password`.
    Code(String),
    /// The provider could not be reached or answered with garbage.
    Transport(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Code(code) => write!(f, "provider rejected request: {code}"),
            ProviderError::Transport(msg) => write!(f, "provider unreachable: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Code(code) => AuthError::from_provider_code(&code),
            ProviderError::Transport(msg) => AuthError::Unknown(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    NotFound,
    Unavailable(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotFound => write!(f, "profile not found"),
            ProfileError::Unavailable(msg) => write!(f, "profile store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ProfileError {}

/// External authentication service.
pub trait IdentityProvider {
    /// Current principal plus every later change. The receiver's initial
    /// value is the provider's best knowledge at subscription time; dropping
    /// the receiver unsubscribes.
    fn subscribe(&self) -> watch::Receiver<Option<Principal>>;

    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Principal, ProviderError>>;

    /// Best-effort sign-out; callers clear their own state first.
    fn sign_out(&self) -> Result<(), ProviderError>;
}

/// External user-profile document store.
pub trait ProfileStore {
    fn get_profile(
        &self,
        principal: &Principal,
    ) -> impl Future<Output = Result<Profile, ProfileError>>;
}
