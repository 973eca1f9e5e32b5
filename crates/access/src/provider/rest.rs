//! HTTP-backed identity provider (password sign-in against an identity
//! toolkit REST endpoint) and profile document store.

use super::{IdentityProvider, Principal, Profile, ProfileError, ProfileStore, ProviderError};
use serde::Deserialize;
use shared_types::{IdentityConfig, Role};
use std::collections::HashMap;
use tokio::sync::watch;

pub struct RestIdentityProvider {
    client: reqwest::Client,
    auth_base_url: String,
    api_key: String,
    current: watch::Sender<Option<Principal>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
    id_token: String,
}

impl From<SignInResponse> for Principal {
    fn from(body: SignInResponse) -> Self {
        Principal {
            id: body.local_id,
            email: body.email,
            display_name: body.display_name,
            photo_url: body.profile_picture,
            access_token: Some(body.id_token),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the provider code from an error response body.
fn parse_error_body(body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ProviderError::Code(envelope.error.message),
        Err(_) => ProviderError::Transport(format!("unexpected error response: {body}")),
    }
}

fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

impl RestIdentityProvider {
    pub fn new(config: &IdentityConfig) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            client: reqwest::Client::new(),
            auth_base_url: config.auth_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            current,
        }
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/accounts:signInWithPassword?key={}",
            self.auth_base_url,
            urlencoding::encode(&self.api_key)
        )
    }
}

impl IdentityProvider for RestIdentityProvider {
    fn subscribe(&self) -> watch::Receiver<Option<Principal>> {
        self.current.subscribe()
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderError> {
        let response = self
            .client
            .post(self.sign_in_url())
            .json(&serde_json::json!({
                "email": email.trim(),
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.map_err(transport)?;
            tracing::debug!(%status, "Sign-in request rejected");
            return Err(parse_error_body(&body));
        }

        let body: SignInResponse = response.json().await.map_err(transport)?;
        let principal = Principal::from(body);
        self.current.send_replace(Some(principal.clone()));
        Ok(principal)
    }

    /// Tokens are held only in memory, so signing out is local.
    fn sign_out(&self) -> Result<(), ProviderError> {
        self.current.send_replace(None);
        Ok(())
    }
}

pub struct RestProfileStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

#[derive(Debug, Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldValue {
    #[serde(default)]
    string_value: Option<String>,
}

impl ProfileDocument {
    fn role(&self) -> Role {
        self.fields
            .get("role")
            .and_then(|field| field.string_value.as_deref())
            .map(Role::from_str_or_default)
            .unwrap_or_default()
    }
}

impl RestProfileStore {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.profile_base_url.trim_end_matches('/').to_string(),
            collection: config.profile_collection.clone(),
        }
    }

    fn document_url(&self, principal_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.collection,
            urlencoding::encode(principal_id)
        )
    }
}

impl ProfileStore for RestProfileStore {
    async fn get_profile(&self, principal: &Principal) -> Result<Profile, ProfileError> {
        if self.base_url.is_empty() {
            return Err(ProfileError::Unavailable(
                "profile store is not configured".into(),
            ));
        }
        let mut request = self.client.get(self.document_url(&principal.id));
        if let Some(token) = &principal.access_token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ProfileError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProfileError::NotFound);
        }
        if !status.is_success() {
            return Err(ProfileError::Unavailable(format!("status {status}")));
        }
        let document: ProfileDocument = response
            .json()
            .await
            .map_err(|e| ProfileError::Unavailable(e.to_string()))?;
        Ok(Profile {
            role: document.role(),
        })
    }
}
