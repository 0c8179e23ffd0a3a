//! Login against the device API.
//!
//! The device hands out a bearer token in exchange for a username and
//! password. Tokens are used as-is for the lifetime of one client.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::VraptorError;

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "vraptor".into(),
            password: "vraptor".into(),
        }
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Login endpoint response. Anything other than a string token is an error.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Exchange credentials for a bearer token via `POST {base_url}/login`.
pub(crate) async fn request_token(
    http: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String, VraptorError> {
    let url = format!("{base_url}/login");
    tracing::debug!(url = %url, username = %credentials.username, "Requesting access token");

    let resp = http
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .json(credentials)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(VraptorError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    parse_token(&body)
}

fn parse_token(body: &str) -> Result<String, VraptorError> {
    let parsed: TokenResponse = serde_json::from_str(body)?;
    match parsed.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(VraptorError::TokenMissing(body.to_string())),
    }
}
