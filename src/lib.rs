//! Google OAuth 2.0 client authenticator.
//!
//! Wraps an injected OAuth wire client with token lifecycle management:
//! interactive web authorization, the device-code flow for limited-input
//! devices, automatic refresh of expired tokens, and request signing with
//! `Authorization: Bearer` headers.
//!
//! # Quick Start
//!
//! ```no_run
//! use gauth::prelude::*;
//!
//! # async fn example<MyOAuthClient: OAuthClient>() -> Result<(), Box<dyn std::error::Error>> {
//! let authenticator = GoogleAuthenticator::<MyOAuthClient>::for_google(
//!     "client-id",
//!     "client-secret",
//!     "com.example.app",
//!     GoogleServiceScope::GoogleAnalyticsRead,
//! );
//!
//! authenticator
//!     .authorize_device(|url, code| println!("Visit {url} and enter {code}"))
//!     .await?;
//!
//! let request = reqwest::Client::new()
//!     .get("https://www.googleapis.com/analytics/v3/management/accounts")
//!     .build()?;
//! let signed = authenticator.authenticate_request(&request).await?;
//! println!("signed request for {}", signed.url());
//! # Ok(())
//! # }
//! ```

pub mod authenticator;
pub mod client;
pub mod device;
pub mod endpoints;
pub mod error;
pub mod prelude;
pub mod scope;
pub mod token;

mod http;

pub use authenticator::GoogleAuthenticator;
pub use client::OAuthClient;
pub use device::DeviceAuthorization;
pub use error::{ErrorAdapter, GoogleAuthenticatorError};
pub use scope::GoogleServiceScope;
pub use token::{AuthorizedToken, BearerToken};
