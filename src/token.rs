use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access granted by an OAuth provider.
///
/// Implementations own their storage; the authenticator only reads
/// snapshots through [`crate::OAuthClient::token`].
pub trait AuthorizedToken: Send + Sync {
    /// Bearer credential presented to the service.
    fn access_token(&self) -> &str;

    /// Credential used to obtain a replacement access token, if issued.
    fn refresh_token(&self) -> Option<&str>;

    /// Time remaining until expiry. `None` when the token never expires.
    fn expires_in(&self) -> Option<Duration>;

    /// Whether the access token is past its expiry.
    fn is_expired(&self) -> bool;

    /// Usable for signing: not expired and the access string is non-empty.
    fn is_valid(&self) -> bool {
        !self.is_expired() && !self.access_token().is_empty()
    }
}

/// Bearer token payload returned by Google's token endpoint.
///
/// # Example
/// ```no_run
/// use gauth::{AuthorizedToken, BearerToken};
///
/// let token = BearerToken::new("access", Some("refresh"), Some(3600));
/// assert!(!token.is_expired());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl BearerToken {
    /// Builds a token expiring `expires_in_secs` from now, or never when `None`.
    ///
    /// The lifetime comes off the wire; one too large for a calendar
    /// timestamp is stored as no expiry.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<&str>,
        expires_in_secs: Option<u64>,
    ) -> Self {
        let expires_at = expires_in_secs
            .and_then(|secs| chrono::Duration::from_std(Duration::from_secs(secs)).ok())
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.map(str::to_string),
            expires_at,
        }
    }

    /// Builds a token with an explicit expiry instant.
    pub fn with_expires_at(
        access_token: impl Into<String>,
        refresh_token: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.map(str::to_string),
            expires_at,
        }
    }
}

impl AuthorizedToken for BearerToken {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    fn expires_in(&self) -> Option<Duration> {
        let expires_at = self.expires_at?;
        let remaining = expires_at - Utc::now();
        Some(remaining.to_std().unwrap_or(Duration::ZERO))
    }

    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }
}
