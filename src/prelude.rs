//! Convenience re-exports for common use.

pub use crate::authenticator::GoogleAuthenticator;
pub use crate::client::OAuthClient;
pub use crate::device::DeviceAuthorization;
pub use crate::error::{ErrorAdapter, GoogleAuthenticatorError};
pub use crate::scope::GoogleServiceScope;
pub use crate::token::{AuthorizedToken, BearerToken};
