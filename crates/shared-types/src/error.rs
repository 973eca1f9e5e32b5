use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign-in and session failures, already reduced to the categories the UI
/// knows how to explain. Raw provider strings never reach the user; they
/// survive only inside `Unknown` for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail")]
pub enum AuthError {
    NoSuchUser,
    WrongPassword,
    InvalidEmail,
    RateLimited,
    /// Credentials were accepted but the profile could not be read; the
    /// least-privileged role was applied instead.
    ProfileLookupFailed,
    /// A sign-in finished after the session had been signed out.
    Superseded,
    Unknown(String),
}

impl AuthError {
    /// Map an identity-provider error code to a category.
    ///
    /// Accepts both SDK-style codes (`auth/wrong-password`) and REST-style
    /// codes (`INVALID_PASSWORD`, optionally followed by ` : <detail>`).
    pub fn from_provider_code(code: &str) -> Self {
        let code = code.split(" : ").next().unwrap_or(code).trim();
        match code {
            "auth/user-not-found" | "EMAIL_NOT_FOUND" => AuthError::NoSuchUser,
            "auth/wrong-password"
            | "INVALID_PASSWORD"
            | "auth/invalid-credential"
            | "INVALID_LOGIN_CREDENTIALS" => AuthError::WrongPassword,
            "auth/invalid-email" | "INVALID_EMAIL" => AuthError::InvalidEmail,
            "auth/too-many-requests" | "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthError::RateLimited,
            other => AuthError::Unknown(other.to_string()),
        }
    }

    /// Fixed message shown on the sign-in page.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::NoSuchUser => "No account exists for this email address.",
            AuthError::WrongPassword => "Incorrect password. Please try again.",
            AuthError::InvalidEmail => "Please enter a valid email address.",
            AuthError::RateLimited => {
                "Too many sign-in attempts. Please wait a moment and try again."
            }
            AuthError::ProfileLookupFailed => {
                "Your profile could not be loaded, so you are signed in with limited access."
            }
            AuthError::Superseded => "This sign-in was cancelled because you signed out.",
            AuthError::Unknown(_) => "Something went wrong. Please try again.",
        }
    }

    /// Stable category name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::NoSuchUser => "NoSuchUser",
            AuthError::WrongPassword => "WrongPassword",
            AuthError::InvalidEmail => "InvalidEmail",
            AuthError::RateLimited => "RateLimited",
            AuthError::ProfileLookupFailed => "ProfileLookupFailed",
            AuthError::Superseded => "Superseded",
            AuthError::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Unknown(detail) => write!(f, "Unknown: {detail}"),
            other => write!(f, "{}: {}", other.kind(), other.user_message()),
        }
    }
}

impl std::error::Error for AuthError {}
