use async_trait::async_trait;
use url::Url;

use crate::error::ErrorAdapter;
use crate::scope::GoogleServiceScope;
use crate::token::AuthorizedToken;

/// OAuth wire capability driven by [`GoogleAuthenticator`].
///
/// Implementations perform the actual OAuth exchanges and own the resulting
/// token: every successful operation caches the new token internally before
/// returning, and [`token`](OAuthClient::token) hands out snapshots of the
/// cache. The authenticator never mutates token state itself.
///
/// [`GoogleAuthenticator`]: crate::GoogleAuthenticator
#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// Token representation issued by this client.
    type Token: AuthorizedToken;

    /// Failure type issued by this client, translatable into the
    /// authenticator taxonomy.
    type Failure: ErrorAdapter;

    fn client_id(&self) -> &str;

    fn client_secret(&self) -> &str;

    fn authorize_url(&self) -> &Url;

    fn token_url(&self) -> Option<&Url>;

    fn redirect_url(&self) -> Option<&Url>;

    /// Scopes requested during authorization.
    fn scopes(&self) -> &[String];

    /// Snapshot of the currently cached token, if any.
    fn token(&self) -> Option<Self::Token>;

    /// Builds a client wired to Google's OAuth endpoints.
    ///
    /// The bundle identifier seeds the out-of-band redirect URL, see
    /// [`endpoints::redirect_url`](crate::endpoints::redirect_url).
    fn for_google(
        client_id: &str,
        client_secret: &str,
        bundle_identifier: &str,
        scope: GoogleServiceScope,
    ) -> Self
    where
        Self: Sized;

    /// Runs the interactive web authorization flow.
    #[cfg(feature = "interactive")]
    async fn authorize(&self) -> Result<Self::Token, Self::Failure>;

    /// Exchanges the refresh token for a new access token.
    ///
    /// A token returned here must not be immediately expired; the
    /// authenticator's sign-after-refresh loop relies on that.
    async fn refresh_token(&self) -> Result<Self::Token, Self::Failure>;

    /// Exchanges a device code for a token. Fails with a pending-flavored
    /// error for as long as the user has not approved the device.
    async fn authorize_device_code(&self, device_code: &str)
        -> Result<Self::Token, Self::Failure>;
}
