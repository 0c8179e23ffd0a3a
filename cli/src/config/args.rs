//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use monochrome::{DEFAULT_GAMMA, KernelName, UnknownKernelError, validate_gamma};
use vraptor_client::DEFAULT_API_URL;

/// Dither an image and show it on a VRaptor OLED display
#[derive(Debug, Parser)]
#[command(name = "vraptor-oled", version)]
pub struct Cli {
    /// VRaptor API URL
    #[arg(long, env = "VRAPTOR_API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,

    /// VRaptor API user
    #[arg(short = 'u', long = "user", env = "VRAPTOR_USER", default_value = "vraptor")]
    pub user: String,

    /// VRaptor API password
    #[arg(
        short = 'p',
        long = "pass",
        env = "VRAPTOR_PASS",
        default_value = "vraptor",
        hide_env_values = true
    )]
    pub pass: String,

    /// Dither method: none, burkes, floydsteinberg, sierra2, sierra3, sierra_lite, stucki, atkinson
    #[arg(
        short = 'd',
        long = "dither",
        env = "VRAPTOR_DITHER",
        default_value = "burkes",
        value_parser = parse_kernel
    )]
    pub dither: KernelName,

    /// Gamma exponent applied to luminance before dithering (larger is darker)
    #[arg(
        short = 'g',
        long,
        env = "VRAPTOR_GAMMA",
        default_value_t = DEFAULT_GAMMA,
        value_parser = parse_gamma
    )]
    pub gamma: f32,

    /// Turn off image mode and exit
    #[arg(long)]
    pub off: bool,

    /// Also write the dithered image to this PNG file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Convert only; never contact the device
    #[arg(long)]
    pub dry_run: bool,

    /// Image to display (PNG or JPEG, exactly 256x64)
    pub image: Option<PathBuf>,
}

fn parse_kernel(s: &str) -> Result<KernelName, UnknownKernelError> {
    s.parse()
}

fn parse_gamma(s: &str) -> Result<f32, String> {
    let gamma: f32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    validate_gamma(gamma).map_err(|e| e.to_string())?;
    Ok(gamma)
}
