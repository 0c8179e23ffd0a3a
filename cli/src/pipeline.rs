//! Decode → validate → dither → upload.

use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, ImageFormat, ImageReader};
use monochrome::DitherConfig;
use vraptor_client::{VraptorClient, check_canvas};

use crate::config::{Action, AppConfig};

/// Decode an image file, detecting the format from its contents.
pub fn load_image(path: &Path) -> anyhow::Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to read {}", path.display()))?;
    reader
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))
}

/// Check the canvas size and dither to black and white.
pub fn render(img: &DynamicImage, dither: &DitherConfig) -> anyhow::Result<DynamicImage> {
    check_canvas(img.width(), img.height())?;

    tracing::debug!(
        kernel = %dither.kernel(),
        gamma = dither.gamma(),
        "Dithering image"
    );
    let bilevel = monochrome::monochrome(img, dither);
    Ok(monochrome::to_dynamic_image(&bilevel))
}

pub fn save_png(img: &DynamicImage, path: &Path) -> anyhow::Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Saved dithered image");
    Ok(())
}

async fn connect(config: &AppConfig) -> anyhow::Result<VraptorClient> {
    VraptorClient::login(&config.api_url, &config.credentials)
        .await
        .context("failed to get token")
}

/// Execute the configured action.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    match &config.action {
        Action::ImageModeOff => {
            let client = connect(config).await?;
            client
                .set_image_mode(false)
                .await
                .context("failed to turn off image mode")?;
            tracing::info!("Turned off image mode");
        }
        Action::Show { image } => {
            let img = load_image(image)?;
            let dithered = render(&img, &config.dither)?;

            if let Some(path) = &config.save_path {
                save_png(&dithered, path)?;
            }
            if config.dry_run {
                tracing::info!("Dry run, not contacting the device");
                return Ok(());
            }

            let client = connect(config).await?;
            client
                .set_image_mode(true)
                .await
                .context("failed to set image mode")?;
            client
                .set_image(&dithered)
                .await
                .context("failed to set image")?;
            tracing::info!(image = %image.display(), "Image set");
        }
    }
    Ok(())
}
