use std::time::Duration;

use serde::Deserialize;
use url::form_urlencoded;

use codepulse_core::Clock;
use codepulse_core::auth::{AuthMode, CredentialsDraft};
use codepulse_core::model::{User, UserId};

use crate::error::AuthError;

/// Pause that stands in for a round trip to an auth backend.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(1500);

const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Generated avatar for users without a picture.
#[must_use]
pub fn avatar_url(seed: &str) -> String {
    let name: String = form_urlencoded::byte_serialize(seed.as_bytes()).collect();
    format!("{AVATAR_BASE}?name={name}&background=3b82f6&color=ffffff")
}

/// Claims of an already-verified identity-provider token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Turns form input or identity claims into a `User`.
#[derive(Clone, Debug)]
pub struct AuthService {
    clock: Clock,
    delay: Duration,
}

impl AuthService {
    #[must_use]
    pub fn new(clock: Clock, delay: Duration) -> Self {
        Self { clock, delay }
    }

    /// Validate the form and mint a local user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` with per-field messages when the form
    /// is incomplete. Nothing is awaited in that case.
    pub async fn authenticate(
        &self,
        mode: AuthMode,
        draft: &CredentialsDraft,
    ) -> Result<User, AuthError> {
        let credentials = draft.validate(mode).map_err(AuthError::Validation)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let id = UserId::new(self.clock.timestamp_millis().to_string());
        let avatar = avatar_url(credentials.avatar_seed());
        tracing::debug!(user_id = %id, ?mode, "credentials accepted");
        Ok(User::new(
            id,
            credentials.display_name(),
            credentials.email(),
            Some(avatar),
        ))
    }

    /// Map verified identity-provider claims to a user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IdentityProvider` when the subject or email is
    /// missing.
    pub fn sign_in_with_identity(&self, claims: IdentityClaims) -> Result<User, AuthError> {
        let IdentityClaims {
            sub,
            name,
            email,
            picture,
        } = claims;

        let sub = sub.trim();
        let Some(email) = email.filter(|email| !email.trim().is_empty()) else {
            tracing::warn!("identity claims carry no email");
            return Err(AuthError::IdentityProvider);
        };
        if sub.is_empty() {
            tracing::warn!("identity claims carry no subject");
            return Err(AuthError::IdentityProvider);
        }

        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());
        let avatar = picture
            .filter(|picture| !picture.trim().is_empty())
            .unwrap_or_else(|| avatar_url(&name));

        Ok(User::new(UserId::new(sub), name, email, Some(avatar)))
    }
}
