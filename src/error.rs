use thiserror::Error;

/// Normalized authenticator errors.
///
/// Every public operation resolves to this taxonomy; capability failures are
/// translated through [`ErrorAdapter`] exactly once at the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoogleAuthenticatorError {
    /// Terminal authorization failure carrying a diagnostic description.
    #[error("Authorization failed: {0}")]
    AuthorizationError(String),
    /// No usable token; the user must authorize again.
    #[error("Invalid access token")]
    InvalidAccessToken,
    /// The user has not finished device verification yet. Retryable, and
    /// only meaningful inside the device-code polling loop.
    #[error("Authorization pending")]
    AuthorizationPending,
    /// The device-verification request itself failed.
    #[error("Device verification failed: {0}")]
    DeviceVerificationFailed(String),
}

/// Translates a capability's failure type into the authenticator taxonomy.
///
/// Implementations must map codes they do not recognize to
/// [`GoogleAuthenticatorError::AuthorizationError`] with the original
/// description preserved.
pub trait ErrorAdapter: std::error::Error + Send + Sync {
    fn to_authenticator_error(&self) -> GoogleAuthenticatorError;
}

impl ErrorAdapter for GoogleAuthenticatorError {
    fn to_authenticator_error(&self) -> GoogleAuthenticatorError {
        self.clone()
    }
}
