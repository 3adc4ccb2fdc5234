use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Device-authorization descriptor returned by the verification endpoint.
///
/// Created once per device-flow invocation, consumed to drive polling, then
/// discarded. Never persisted.
///
/// # Example
/// ```
/// use gauth::DeviceAuthorization;
///
/// let descriptor = DeviceAuthorization::from_json(&serde_json::json!({
///     "device_code": "device-auth-id",
///     "user_code": "ABCD-EFGH",
///     "verification_url": "https://www.google.com/device",
///     "expires_in": 1800,
///     "interval": 5,
/// }))
/// .expect("complete response");
/// assert_eq!(descriptor.user_code, "ABCD-EFGH");
/// ```
#[derive(Debug, Clone)]
pub struct DeviceAuthorization {
    pub device_code: String,
    pub user_code: String,
    pub verification_url: Url,
    /// How long the user code stays redeemable.
    pub expires_in: Duration,
    /// Pause between polling attempts. Always non-zero.
    pub retry_interval: Duration,
}

#[derive(Deserialize)]
struct DeviceAuthorizationResponse {
    device_code: String,
    user_code: String,
    verification_url: String,
    expires_in: u64,
    interval: u64,
}

impl DeviceAuthorization {
    /// Parses the verification-endpoint JSON body.
    ///
    /// Returns `None` when any of the five required fields is missing or
    /// mistyped, when the verification URL does not parse, or when the
    /// polling interval is zero.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        let response = DeviceAuthorizationResponse::deserialize(json).ok()?;
        if response.interval == 0 {
            return None;
        }
        let verification_url = Url::parse(&response.verification_url).ok()?;
        Some(Self {
            device_code: response.device_code,
            user_code: response.user_code,
            verification_url,
            expires_in: Duration::from_secs(response.expires_in),
            retry_interval: Duration::from_secs(response.interval),
        })
    }
}
