//! Display endpoints: image mode and image upload.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::auth::{Credentials, request_token};
use crate::{VraptorError, check_canvas};

/// Payload for `PUT /display/image`.
#[derive(Debug, Serialize)]
struct ImageModePayload {
    status: bool,
}

/// Authenticated client for one device.
pub struct VraptorClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl VraptorClient {
    /// Log in and return a client holding the issued token.
    pub async fn login(base_url: &str, credentials: &Credentials) -> Result<Self, VraptorError> {
        let http = reqwest::Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();
        let token = request_token(&http, &base_url, credentials).await?;
        tracing::info!(base_url = %base_url, "Logged in to VRaptor");
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Build a client around an already issued token.
    pub fn with_token(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn the display's image mode on or off.
    pub async fn set_image_mode(&self, enable: bool) -> Result<(), VraptorError> {
        let url = format!("{}/display/image", self.base_url);
        tracing::debug!(url = %url, enable, "Setting image mode");

        let resp = self
            .http
            .put(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .json(&ImageModePayload { status: enable })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(VraptorError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }

    /// Upload an image to the display as PNG.
    ///
    /// The image must match the canvas exactly; this is checked before any
    /// request is made. The device answers `202 Accepted` on success.
    pub async fn set_image(&self, img: &DynamicImage) -> Result<(), VraptorError> {
        check_canvas(img.width(), img.height())?;

        let png = encode_png(img)?;
        let url = format!("{}/display/image/file", self.base_url);
        tracing::debug!(url = %url, bytes = png.len(), "Uploading image");

        let part = Part::bytes(png)
            .file_name("image")
            .mime_str("image/png")?;
        let form = Form::new().part("file", part);

        let resp = self
            .http
            .put(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::ACCEPTED {
            let body = resp.text().await?;
            return Err(VraptorError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}

/// Encode an image as PNG bytes.
pub(crate) fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, VraptorError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
