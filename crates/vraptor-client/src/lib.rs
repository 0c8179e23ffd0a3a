//! HTTP client for the VRaptor OLED display API.
//!
//! Provides login, image-mode switching, and PNG upload to the
//! 256x64 display canvas.

pub mod auth;
pub mod display;


pub use auth::Credentials;
pub use display::VraptorClient;

/// Default API base URL of a device on the local network.
pub const DEFAULT_API_URL: &str = "http://vraptor.local:5000/api";

/// Display canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 256;

/// Display canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 64;

/// Unified error type for the vraptor-client crate.
#[derive(Debug, thiserror::Error)]
pub enum VraptorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Login response has no access token: {0}")]
    TokenMissing(String),

    #[error("VRaptor API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Image size should be 256x64, but got {width}x{height}")]
    CanvasSize { width: u32, height: u32 },
}

/// Fail unless `width` x `height` is exactly the display canvas.
pub fn check_canvas(width: u32, height: u32) -> Result<(), VraptorError> {
    if width != CANVAS_WIDTH || height != CANVAS_HEIGHT {
        return Err(VraptorError::CanvasSize { width, height });
    }
    Ok(())
}
