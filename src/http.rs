//! Form-encoded POST helper for the device-verification endpoint.

use std::collections::HashMap;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Failure of a single verification POST.
#[derive(Debug, Error)]
pub(crate) enum HttpError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Response body is not a JSON object")]
    NotAJsonObject,
}

/// Sends one form-encoded POST and decodes the body as a JSON object.
///
/// Single attempt; retry is the caller's concern.
pub(crate) async fn post_form(
    client: &reqwest::Client,
    url: Url,
    params: &HashMap<&'static str, String>,
) -> Result<serde_json::Value, HttpError> {
    let response = client
        .post(url)
        .header("Accept", "application/json")
        .form(params)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(HttpError::Status { status, body });
    }
    let json: serde_json::Value = response.json().await?;
    if !json.is_object() {
        return Err(HttpError::NotAJsonObject);
    }
    Ok(json)
}
