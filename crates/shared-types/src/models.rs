use crate::Role;
use serde::{Deserialize, Serialize};

/// Authenticated user as seen by the back office (safe to hand to the UI).
///
/// Built from an identity-provider principal plus the role stored in the
/// user's profile document. Always carries exactly one role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Identity {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let from_words: String = self
            .display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        if from_words.is_empty() {
            self.email.chars().take(2).collect::<String>().to_uppercase()
        } else {
            from_words.to_uppercase()
        }
    }
}

/// Fallback display name when the provider has none: the email local part.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Credentials submitted from the sign-in form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Trimmed email; passwords are taken verbatim.
    pub fn normalized_email(&self) -> &str {
        self.email.trim()
    }
}
