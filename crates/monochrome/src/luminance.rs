//! Color to gamma-adjusted luminance conversion.

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::grid::PixelGrid;

// ITU-R BT.601 luma weights (0.299, 0.587, 0.114) in 16-bit fixed point.
// They sum to exactly 1 << 16 so pure white maps to exactly 1.0.
const RED_WEIGHT: u32 = 19595;
const GREEN_WEIGHT: u32 = 38470;
const BLUE_WEIGHT: u32 = 7471;
const FULL_SCALE: f32 = 65536.0 * 255.0;

/// Luminance of one 8-bit RGB pixel, normalized to `[0, 1]` and raised to `gamma`.
///
/// A gamma above 1 darkens midtones; 0 and 1 stay fixed.
pub fn luma(r: u8, g: u8, b: u8, gamma: f32) -> f32 {
    let weighted =
        RED_WEIGHT * u32::from(r) + GREEN_WEIGHT * u32::from(g) + BLUE_WEIGHT * u32::from(b);
    (weighted as f32 / FULL_SCALE).powf(gamma)
}

/// Convert an image to a luminance grid. Alpha is ignored.
///
/// `gamma` must already be validated (see [`crate::validate_gamma`]).
pub fn to_luminance(img: &DynamicImage, gamma: f32) -> PixelGrid {
    let (width, height) = img.dimensions();
    debug!(width, height, gamma, "Converting image to luminance");

    let mut grid = PixelGrid::from_value(width, height, 0.0);
    for (x, y, px) in img.pixels() {
        let [r, g, b, _] = px.0;
        grid.set(x, y, luma(r, g, b, gamma));
    }
    grid
}
