use crate::Role;
use serde::{Deserialize, Serialize};

/// Top-level config file structure matching `config.toml`.
///
/// Every section has a serde default so a missing or partial file still
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Accounts seeded into the in-memory identity provider.
    #[serde(default)]
    pub demo_users: Vec<DemoUser>,
}

/// Remote identity provider and profile store endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,
    /// Base URL of the profile document store. Empty disables remote lookups.
    #[serde(default)]
    pub profile_base_url: String,
    #[serde(default = "default_profile_collection")]
    pub profile_collection: String,
}

fn default_auth_base_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_profile_collection() -> String {
    "users".to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_base_url: default_auth_base_url(),
            profile_base_url: String::new(),
            profile_collection: default_profile_collection(),
        }
    }
}

/// A seeded account. `role: None` leaves the account without a profile
/// document, which exercises the least-privileged fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
