//! Runtime configuration resolved from command-line flags and environment.

use std::path::PathBuf;

use anyhow::{Context, bail};
use monochrome::DitherConfig;
use vraptor_client::Credentials;

use super::args::Cli;
use super::validation::validate_setting;

/// What one invocation does.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Log in and switch image mode off.
    ImageModeOff,
    /// Dither `image` and show it.
    Show { image: PathBuf },
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub credentials: Credentials,
    pub dither: DitherConfig,
    pub action: Action,
    pub save_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl AppConfig {
    /// Validate parsed flags. Fails before any file or network access.
    pub fn from_cli(cli: Cli) -> Result<Self, anyhow::Error> {
        validate_setting("VRAPTOR_API_URL", &cli.url)
            .map_err(|e| anyhow::anyhow!("invalid --url '{}': {e}", cli.url))?;
        validate_setting("VRAPTOR_USER", &cli.user)
            .map_err(|e| anyhow::anyhow!("invalid --user: {e}"))?;

        let dither = DitherConfig::new(cli.dither, cli.gamma).context("invalid dither settings")?;

        let action = if cli.off {
            if cli.dry_run {
                bail!("--off talks to the device and cannot be combined with --dry-run");
            }
            if let Some(image) = &cli.image {
                tracing::warn!(image = %image.display(), "Ignoring image because --off was given");
            }
            if cli.save.is_some() {
                tracing::warn!("Ignoring --save because --off was given");
            }
            Action::ImageModeOff
        } else {
            let Some(image) = cli.image else {
                bail!("an image path is required unless --off is given");
            };
            Action::Show { image }
        };

        Ok(Self {
            api_url: cli.url,
            credentials: Credentials::new(cli.user, cli.pass),
            dither,
            action,
            save_path: cli.save,
            dry_run: cli.dry_run,
        })
    }
}
