//! Monochrome error-diffusion dithering.
//!
//! Converts continuous-tone images into two-level (black/white) images for
//! small OLED panels, pushing each pixel's quantization error onto the pixels
//! that follow it in raster order.

pub mod dither;
pub mod grid;
pub mod kernel;
pub mod luminance;
pub mod output;

// Re-exports for convenience
pub use dither::{diffuse, monochrome};
pub use grid::{BilevelImage, PixelGrid};
pub use kernel::{Kernel, KernelName, Tap, UnknownKernelError, lookup};
pub use luminance::to_luminance;
pub use output::{from_gray_image, pack_rows, to_dynamic_image, to_gray_image, to_rgba_image};

/// Gamma applied when none is configured.
pub const DEFAULT_GAMMA: f32 = 1.18;

/// Errors raised before or around a dithering pass.
#[derive(Debug, thiserror::Error)]
pub enum DitherError {
    #[error(transparent)]
    UnknownKernel(#[from] UnknownKernelError),

    #[error("Invalid gamma {0}: must be a positive finite number")]
    InvalidGamma(f32),

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Kernel and gamma selection for one conversion.
///
/// Built once per invocation and never mutated during processing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherConfig {
    kernel: KernelName,
    gamma: f32,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            kernel: KernelName::Burkes,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl DitherConfig {
    /// Create a config, rejecting non-positive or non-finite gamma.
    pub fn new(kernel: KernelName, gamma: f32) -> Result<Self, DitherError> {
        validate_gamma(gamma)?;
        Ok(Self { kernel, gamma })
    }

    /// Create a config from a kernel name as typed by a user.
    pub fn parse(kernel: &str, gamma: f32) -> Result<Self, DitherError> {
        let kernel = kernel.parse::<KernelName>()?;
        Self::new(kernel, gamma)
    }

    pub fn kernel(&self) -> KernelName {
        self.kernel
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }
}

/// Check that `gamma` can be used as a luminance exponent.
pub fn validate_gamma(gamma: f32) -> Result<(), DitherError> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(())
    } else {
        Err(DitherError::InvalidGamma(gamma))
    }
}
