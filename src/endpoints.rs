//! Google OAuth 2.0 endpoint constants.

/// Interactive authorization endpoint.
pub const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/auth";

/// Token exchange and refresh endpoint.
pub const TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v4/token";

/// Device-code verification endpoint.
pub const DEVICE_VERIFICATION_URL: &str = "https://accounts.google.com/o/oauth2/device/code";

/// Grant type sent when exchanging a device code for a token.
pub const DEVICE_GRANT_TYPE: &str = "http://oauth.net/grant_type/device/1.0";

/// Out-of-band callback postfix appended to the application identifier.
pub const CALLBACK_POSTFIX: &str = ":/urn:ietf:wg:oauth:2.0:oob";

/// Builds the OOB redirect URL for an application bundle identifier.
pub fn redirect_url(bundle_identifier: &str) -> String {
    format!("{bundle_identifier}{CALLBACK_POSTFIX}")
}
