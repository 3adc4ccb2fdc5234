use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};
use url::Url;

use crate::client::OAuthClient;
use crate::device::DeviceAuthorization;
use crate::endpoints;
use crate::error::{ErrorAdapter, GoogleAuthenticatorError};
use crate::http;
use crate::scope::GoogleServiceScope;
use crate::token::AuthorizedToken;

/// Google OAuth 2.0 authenticator generic over an OAuth wire client.
///
/// The authenticator mediates between callers that want signed requests and
/// the injected [`OAuthClient`] that performs the actual exchanges. It holds
/// no session state of its own; the client owns the token.
///
/// # Example
/// ```no_run
/// use gauth::{GoogleAuthenticator, GoogleServiceScope, OAuthClient};
///
/// # async fn example<MyOAuthClient: OAuthClient>() -> Result<(), gauth::GoogleAuthenticatorError> {
/// let authenticator = GoogleAuthenticator::<MyOAuthClient>::for_google(
///     "client-id",
///     "client-secret",
///     "com.example.app",
///     GoogleServiceScope::GoogleAnalyticsRead,
/// );
/// authenticator
///     .authorize_device(|url, code| println!("Visit {url} and enter {code}"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct GoogleAuthenticator<C: OAuthClient> {
    oauth_client: C,
    http_client: reqwest::Client,
    device_verification_url: Url,
}

impl<C: OAuthClient> GoogleAuthenticator<C> {
    /// Wraps an already-configured OAuth client.
    pub fn new(oauth_client: C) -> Self {
        Self {
            oauth_client,
            http_client: reqwest::Client::new(),
            device_verification_url: Url::parse(endpoints::DEVICE_VERIFICATION_URL)
                .expect("device verification endpoint is a valid URL"),
        }
    }

    /// Builds the OAuth client through [`OAuthClient::for_google`] and wraps it.
    pub fn for_google(
        client_id: &str,
        client_secret: &str,
        bundle_identifier: &str,
        scope: GoogleServiceScope,
    ) -> Self {
        Self::new(C::for_google(
            client_id,
            client_secret,
            bundle_identifier,
            scope,
        ))
    }

    /// Overrides the device-verification endpoint.
    pub fn with_device_verification_url(mut self, url: Url) -> Self {
        self.device_verification_url = url;
        self
    }

    /// The client ID of the underlying OAuth client.
    pub fn client_id(&self) -> &str {
        self.oauth_client.client_id()
    }

    /// The client secret of the underlying OAuth client.
    pub fn client_secret(&self) -> &str {
        self.oauth_client.client_secret()
    }

    /// Snapshot of the currently cached token, if any.
    pub fn token(&self) -> Option<C::Token> {
        self.oauth_client.token()
    }

    /// The requested scopes as a single scope value.
    pub fn scope(&self) -> GoogleServiceScope {
        GoogleServiceScope::from(self.oauth_client.scopes().to_vec())
    }

    /// Whether a signing-ready token is cached: non-expired with a non-empty
    /// access string. No side effects, no I/O.
    pub fn is_authorized(&self) -> bool {
        self.oauth_client
            .token()
            .is_some_and(|token| token.is_valid())
    }

    /// Runs the interactive web authorization flow. On success the token is
    /// cached inside the OAuth client.
    #[cfg(feature = "interactive")]
    pub async fn authorize(&self) -> Result<(), GoogleAuthenticatorError> {
        self.oauth_client
            .authorize()
            .await
            .map(|_| ())
            .map_err(|error| error.to_authenticator_error())
    }

    /// Produces an authenticated copy of `request` with an
    /// `Authorization: Bearer` header.
    ///
    /// An expired token is refreshed through the OAuth client first; a
    /// refresh failure surfaces as the mapped error and the request is never
    /// returned partially signed. Without any cached token this fails
    /// immediately with [`GoogleAuthenticatorError::InvalidAccessToken`].
    ///
    /// The request must not carry a streaming body. Concurrent calls over an
    /// expired token may each trigger their own refresh.
    pub async fn authenticate_request(
        &self,
        request: &reqwest::Request,
    ) -> Result<reqwest::Request, GoogleAuthenticatorError> {
        loop {
            let token = match self.oauth_client.token() {
                Some(token) => token,
                None => return Err(GoogleAuthenticatorError::InvalidAccessToken),
            };
            if token.is_expired() {
                debug!("access token expired, refreshing");
                self.oauth_client
                    .refresh_token()
                    .await
                    .map_err(|error| error.to_authenticator_error())?;
                continue;
            }
            return sign_request(request, token.access_token());
        }
    }

    /// Runs the device-code authorization flow end to end.
    ///
    /// Requests a device authorization from the verification endpoint, hands
    /// `(verification_url, user_code)` to `verify` exactly once so the caller
    /// can show instructions to the user, then polls the OAuth client until
    /// the user approves or the authorization window closes. On success the
    /// token is cached inside the OAuth client.
    pub async fn authorize_device<F>(&self, verify: F) -> Result<(), GoogleAuthenticatorError>
    where
        F: FnOnce(Url, String) + Send,
    {
        let params = self.parameters_for_device_verification();
        let json = http::post_form(
            &self.http_client,
            self.device_verification_url.clone(),
            &params,
        )
        .await
        .map_err(|error| GoogleAuthenticatorError::DeviceVerificationFailed(error.to_string()))?;

        let descriptor = DeviceAuthorization::from_json(&json)
            .ok_or(GoogleAuthenticatorError::InvalidAccessToken)?;
        let DeviceAuthorization {
            device_code,
            user_code,
            verification_url,
            expires_in,
            retry_interval,
        } = descriptor;

        debug!(%user_code, "device verification started");
        verify(verification_url, user_code);

        self.poll_access_token(&device_code, retry_interval, expires_in)
            .await
    }

    /// Polls the device-code exchange until the user approves, a terminal
    /// error occurs, or the authorization window closes.
    ///
    /// Only a pending authorization is retried, after exactly
    /// `retry_interval`; every other error is terminal. An attempt that
    /// would start past the `expires_in` deadline is not made and the
    /// expired window surfaces as
    /// [`GoogleAuthenticatorError::AuthorizationError`]. A window larger
    /// than the clock can represent never closes.
    pub async fn poll_access_token(
        &self,
        device_code: &str,
        retry_interval: Duration,
        expires_in: Duration,
    ) -> Result<(), GoogleAuthenticatorError> {
        // Both durations come off the wire and can exceed what an Instant
        // can hold.
        let deadline = Instant::now().checked_add(expires_in);
        loop {
            match self.oauth_client.authorize_device_code(device_code).await {
                Ok(_) => {
                    debug!("device authorization granted");
                    return Ok(());
                }
                Err(error) => {
                    let error = error.to_authenticator_error();
                    if error != GoogleAuthenticatorError::AuthorizationPending {
                        return Err(error);
                    }
                }
            }
            // An attempt that cannot be scheduled is past any deadline.
            let window_closed = match deadline {
                Some(deadline) => Instant::now()
                    .checked_add(retry_interval)
                    .map_or(true, |next_attempt| next_attempt >= deadline),
                None => false,
            };
            if window_closed {
                warn!("device code expired before the user authorized");
                return Err(GoogleAuthenticatorError::AuthorizationError(
                    "Device code expired before authorization completed".to_string(),
                ));
            }
            sleep(retry_interval).await;
        }
    }

    /// Form parameters for the device-verification request.
    pub fn parameters_for_device_verification(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("client_id", self.client_id().to_string()),
            ("scope", self.scope().canonical()),
        ])
    }

    /// Form parameters for the device-code token exchange.
    pub fn parameters_for_device_authorization(
        &self,
        device_code: &str,
    ) -> HashMap<&'static str, String> {
        HashMap::from([
            ("client_id", self.client_id().to_string()),
            ("client_secret", self.client_secret().to_string()),
            ("code", device_code.to_string()),
            ("grant_type", endpoints::DEVICE_GRANT_TYPE.to_string()),
        ])
    }
}

fn sign_request(
    request: &reqwest::Request,
    access_token: &str,
) -> Result<reqwest::Request, GoogleAuthenticatorError> {
    let mut signed = request.try_clone().ok_or_else(|| {
        GoogleAuthenticatorError::AuthorizationError(
            "Request body is a stream and cannot be signed".to_string(),
        )
    })?;
    let value = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .map_err(|_| GoogleAuthenticatorError::InvalidAccessToken)?;
    signed.headers_mut().insert(AUTHORIZATION, value);
    Ok(signed)
}
