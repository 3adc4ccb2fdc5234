#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gauth::{AuthorizedToken, GoogleAuthenticatorError, GoogleServiceScope, OAuthClient};
use url::Url;

/// In-memory token with scripted validity.
#[derive(Debug, Clone)]
pub struct MockToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<Duration>,
    pub expired: bool,
}

impl MockToken {
    pub fn valid() -> Self {
        Self::valid_with("mock-access-token")
    }

    pub fn valid_with(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            refresh_token: Some("mock-refresh-token".to_string()),
            expires_in: Some(Duration::from_secs(3600)),
            expired: false,
        }
    }

    pub fn expired() -> Self {
        Self {
            access_token: "stale-access-token".to_string(),
            refresh_token: Some("mock-refresh-token".to_string()),
            expires_in: Some(Duration::ZERO),
            expired: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            access_token: String::new(),
            refresh_token: None,
            expires_in: None,
            expired: false,
        }
    }
}

impl AuthorizedToken for MockToken {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }

    fn is_expired(&self) -> bool {
        self.expired
    }
}

/// Scripted OAuth client: every operation succeeds and caches a token unless
/// a failure was queued with [`MockOAuthClient::fail_next`].
///
/// Clones share state, so tests can keep a handle for inspection after
/// handing one to the authenticator.
#[derive(Clone)]
pub struct MockOAuthClient {
    inner: Arc<MockState>,
}

struct MockState {
    client_id: String,
    client_secret: String,
    authorize_url: Url,
    token_url: Option<Url>,
    redirect_url: Option<Url>,
    scopes: Vec<String>,
    token: Mutex<Option<MockToken>>,
    queued_failures: Mutex<VecDeque<GoogleAuthenticatorError>>,
    authorize_calls: AtomicUsize,
    refresh_calls: AtomicUsize,
    device_code_calls: AtomicUsize,
    seen_device_codes: Mutex<Vec<String>>,
}

impl MockOAuthClient {
    pub fn new() -> Self {
        Self::for_google(
            "mock-client-id",
            "mock-client-secret",
            "com.example.mock",
            GoogleServiceScope::GoogleAnalyticsRead,
        )
    }

    pub fn with_token(self, token: MockToken) -> Self {
        *self.inner.token.lock().expect("token lock poisoned") = Some(token);
        self
    }

    /// Queues a failure for whichever operation runs next.
    pub fn fail_next(&self, error: GoogleAuthenticatorError) {
        self.inner
            .queued_failures
            .lock()
            .expect("failure queue lock poisoned")
            .push_back(error);
    }

    pub fn authorize_calls(&self) -> usize {
        self.inner.authorize_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_calls(&self) -> usize {
        self.inner.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn device_code_calls(&self) -> usize {
        self.inner.device_code_calls.load(Ordering::SeqCst)
    }

    pub fn seen_device_codes(&self) -> Vec<String> {
        self.inner
            .seen_device_codes
            .lock()
            .expect("device code lock poisoned")
            .clone()
    }

    fn next_failure(&self) -> Option<GoogleAuthenticatorError> {
        self.inner
            .queued_failures
            .lock()
            .expect("failure queue lock poisoned")
            .pop_front()
    }

    fn cache_token(&self, token: MockToken) -> MockToken {
        *self.inner.token.lock().expect("token lock poisoned") = Some(token.clone());
        token
    }
}

#[async_trait]
impl OAuthClient for MockOAuthClient {
    type Token = MockToken;
    type Failure = GoogleAuthenticatorError;

    fn client_id(&self) -> &str {
        &self.inner.client_id
    }

    fn client_secret(&self) -> &str {
        &self.inner.client_secret
    }

    fn authorize_url(&self) -> &Url {
        &self.inner.authorize_url
    }

    fn token_url(&self) -> Option<&Url> {
        self.inner.token_url.as_ref()
    }

    fn redirect_url(&self) -> Option<&Url> {
        self.inner.redirect_url.as_ref()
    }

    fn scopes(&self) -> &[String] {
        &self.inner.scopes
    }

    fn token(&self) -> Option<MockToken> {
        self.inner.token.lock().expect("token lock poisoned").clone()
    }

    fn for_google(
        client_id: &str,
        client_secret: &str,
        bundle_identifier: &str,
        scope: GoogleServiceScope,
    ) -> Self {
        let authorize_url =
            Url::parse(gauth::endpoints::AUTHORIZE_URL).expect("authorize url parses");
        let token_url = Url::parse(gauth::endpoints::TOKEN_URL).expect("token url parses");
        let redirect_url = Url::parse(&gauth::endpoints::redirect_url(bundle_identifier))
            .expect("redirect url parses");
        Self {
            inner: Arc::new(MockState {
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
                authorize_url,
                token_url: Some(token_url),
                redirect_url: Some(redirect_url),
                scopes: vec![scope.canonical()],
                token: Mutex::new(None),
                queued_failures: Mutex::new(VecDeque::new()),
                authorize_calls: AtomicUsize::new(0),
                refresh_calls: AtomicUsize::new(0),
                device_code_calls: AtomicUsize::new(0),
                seen_device_codes: Mutex::new(Vec::new()),
            }),
        }
    }

    #[cfg(feature = "interactive")]
    async fn authorize(&self) -> Result<MockToken, GoogleAuthenticatorError> {
        self.inner.authorize_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.next_failure() {
            return Err(error);
        }
        Ok(self.cache_token(MockToken::valid()))
    }

    async fn refresh_token(&self) -> Result<MockToken, GoogleAuthenticatorError> {
        self.inner.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.next_failure() {
            return Err(error);
        }
        Ok(self.cache_token(MockToken::valid_with("refreshed-access-token")))
    }

    async fn authorize_device_code(
        &self,
        device_code: &str,
    ) -> Result<MockToken, GoogleAuthenticatorError> {
        self.inner.device_code_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .seen_device_codes
            .lock()
            .expect("device code lock poisoned")
            .push(device_code.to_string());
        if let Some(error) = self.next_failure() {
            return Err(error);
        }
        Ok(self.cache_token(MockToken::valid_with("device-access-token")))
    }
}
