//! Error-diffusion dithering to black and white.
//!
//! Pixels are visited in raster order. Each one is thresholded at 0.5 and the
//! difference between its accumulated value and the chosen level is pushed to
//! later pixels according to the kernel's taps.

use image::DynamicImage;
use tracing::debug;

use crate::DitherConfig;
use crate::grid::{BilevelImage, PixelGrid};
use crate::kernel::Kernel;
use crate::luminance::to_luminance;

/// Midpoint between the black (0.0) and white (1.0) output levels.
const THRESHOLD: f32 = 0.5;

/// Dither a luminance grid with `kernel`.
///
/// Takes ownership of the grid because it is used as the error accumulator.
/// Error diffused past the grid edges is dropped. Accumulated values are not
/// clamped, so a pixel can end up below 0 or above 1 before it is decided.
pub fn diffuse(mut grid: PixelGrid, kernel: &Kernel) -> BilevelImage {
    let (width, height) = grid.dimensions();
    debug!(width, height, kernel = %kernel.name, "Applying error diffusion");

    let factors: Vec<(i32, i32, f32)> = kernel
        .taps
        .iter()
        .map(|t| (t.dx, t.dy, kernel.tap_factor(t)))
        .collect();

    let mut bits = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let value = grid.get(x, y);
            let white = value >= THRESHOLD;
            bits.push(white);

            if factors.is_empty() {
                continue;
            }

            let error = value - if white { 1.0 } else { 0.0 };
            for &(dx, dy, factor) in &factors {
                grid.add_offset(x, y, dx, dy, error * factor);
            }
        }
    }

    let output = BilevelImage::from_bits(width, height, bits);
    debug!(white = output.white_count(), "Error diffusion complete");
    output
}

/// Convert an image to black and white using `config`'s gamma and kernel.
pub fn monochrome(img: &DynamicImage, config: &DitherConfig) -> BilevelImage {
    let grid = to_luminance(img, config.gamma());
    diffuse(grid, &config.kernel().kernel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelName;
    use image::{GrayImage, Luma};

    fn grid(width: u32, height: u32, values: &[f32]) -> PixelGrid {
        PixelGrid::from_vec(width, height, values.to_vec()).unwrap()
    }

    /// Diagonal gradient from 0.0 at the top-left to 1.0 at the bottom-right.
    fn gradient(width: u32, height: u32) -> PixelGrid {
        let span = (width + height - 2).max(1) as f32;
        let values: Vec<f32> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x + y) as f32 / span))
            .collect();
        grid(width, height, &values)
    }

    #[test]
    fn test_none_two_pixels() {
        let out = diffuse(grid(2, 1, &[0.0, 1.0]), &KernelName::None.kernel());
        assert_eq!(out.bits(), &[false, true]);
    }

    #[test]
    fn test_none_is_pure_threshold() {
        let input = gradient(9, 7);
        let out = diffuse(input.clone(), &KernelName::None.kernel());
        for y in 0..7 {
            for x in 0..9 {
                assert_eq!(
                    out.is_white(x, y),
                    input.get(x, y) >= 0.5,
                    "pixel ({x}, {y}) = {}",
                    input.get(x, y)
                );
            }
        }
    }

    #[test]
    fn test_floyd_steinberg_row_at_threshold() {
        // 0.5 -> white, error -0.5, right neighbour gets -0.5 * 7/16:
        //   x0: 0.5               -> white, e = -0.5
        //   x1: 0.5 - 0.21875     -> black, e =  0.28125
        //   x2: 0.5 + 0.12304688  -> white, e = -0.37695312
        //   x3: 0.5 - 0.16491699  -> black
        let out = diffuse(
            grid(4, 1, &[0.5, 0.5, 0.5, 0.5]),
            &KernelName::FloydSteinberg.kernel(),
        );
        assert_eq!(out.bits(), &[true, false, true, false]);
    }

    #[test]
    fn test_floyd_steinberg_spreads_to_next_row() {
        // 0.25 at (0,0) -> black, error 0.25: (0,1) gets 5/16, (1,1) gets 1/16.
        let mut input = vec![0.0; 4];
        input[0] = 0.25;
        input[2] = 0.45;
        let out = diffuse(grid(2, 2, &input), &KernelName::FloydSteinberg.kernel());
        // (0,1): 0.45 + 0.25 * 5/16 + 0.109 * 3/16 ~= 0.549 -> white
        assert_eq!(out.bits(), &[false, false, true, false]);

        let untouched = diffuse(grid(2, 2, &input), &KernelName::None.kernel());
        assert_eq!(untouched.bits(), &[false, false, false, false]);
    }

    #[test]
    fn test_single_pixel_every_kernel() {
        for name in KernelName::ALL {
            let kernel = name.kernel();
            assert_eq!(diffuse(grid(1, 1, &[0.49]), &kernel).bits(), &[false]);
            assert_eq!(diffuse(grid(1, 1, &[0.5]), &kernel).bits(), &[true]);
        }
    }

    #[test]
    fn test_edges_every_kernel() {
        for name in KernelName::ALL {
            let kernel = name.kernel();
            for (w, h) in [(1, 5), (5, 1), (2, 2), (3, 3), (17, 4)] {
                let out = diffuse(gradient(w, h), &kernel);
                assert_eq!(out.dimensions(), (w, h), "kernel {name}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for name in KernelName::ALL {
            let kernel = name.kernel();
            let a = diffuse(gradient(31, 13), &kernel);
            let b = diffuse(gradient(31, 13), &kernel);
            assert_eq!(a, b, "kernel {name} is not deterministic");
        }
    }

    #[test]
    fn test_uniform_extremes_stay_solid() {
        for name in KernelName::ALL {
            let kernel = name.kernel();
            let black = diffuse(PixelGrid::from_value(8, 8, 0.0), &kernel);
            let white = diffuse(PixelGrid::from_value(8, 8, 1.0), &kernel);
            assert_eq!(black.white_count(), 0, "kernel {name}");
            assert_eq!(white.white_count(), 64, "kernel {name}");
        }
    }

    #[test]
    fn test_mid_gray_brightness_preserved() {
        let out = diffuse(
            PixelGrid::from_value(64, 64, 0.5),
            &KernelName::FloydSteinberg.kernel(),
        );
        let fraction = out.white_count() as f32 / (64.0 * 64.0);
        assert!(
            (fraction - 0.5).abs() <= 0.05,
            "white fraction {fraction} is not close to 0.5"
        );
    }

    #[test]
    fn test_brightness_preserved_every_diffusing_kernel() {
        for name in KernelName::ALL.into_iter().filter(|n| *n != KernelName::None) {
            for level in [0.1, 0.25, 0.75] {
                let out = diffuse(PixelGrid::from_value(64, 64, level), &name.kernel());
                let fraction = out.white_count() as f32 / (64.0 * 64.0);
                assert!(
                    (fraction - level).abs() <= 0.05,
                    "kernel {name} at {level}: white fraction {fraction}"
                );
            }
        }
    }

    #[test]
    fn test_right_edge_error_does_not_wrap() {
        // (1,0) = 0.45 -> black, e = 0.45. Its right tap (7/16) falls off the
        // grid. Kept in bounds, (0,1) = 0.3 + 0.45 * 3/16 ~= 0.384 -> black;
        // wrapped onto (0,1) it would reach ~0.581 and turn white.
        let out = diffuse(
            grid(2, 2, &[0.0, 0.45, 0.3, 0.0]),
            &KernelName::FloydSteinberg.kernel(),
        );
        assert_eq!(out.bits(), &[false, false, false, false]);
    }

    #[test]
    fn test_right_edge_wide_kernels_do_not_wrap() {
        // Last column just under threshold, next row's first pixel close behind.
        // Any right-reaching tap wrapping into the next row would flip (0,1).
        for name in KernelName::ALL.into_iter().filter(|n| *n != KernelName::None) {
            let out = diffuse(
                grid(3, 2, &[0.0, 0.0, 0.45, 0.45, 0.0, 0.0]),
                &name.kernel(),
            );
            assert!(!out.is_white(0, 1), "kernel {name} wrapped error into (0, 1)");
        }
    }

    #[test]
    fn test_monochrome_uses_gamma() {
        // 140/255 ~= 0.549: white at gamma 1, black once gamma pushes it under 0.5.
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([140])));
        let linear = DitherConfig::new(KernelName::None, 1.0).unwrap();
        let dark = DitherConfig::new(KernelName::None, 2.0).unwrap();
        assert!(monochrome(&img, &linear).is_white(0, 0));
        assert!(!monochrome(&img, &dark).is_white(0, 0));
    }

    #[test]
    fn test_monochrome_preserves_dimensions() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(10, 5, Luma([90])));
        let out = monochrome(&img, &DitherConfig::default());
        assert_eq!(out.dimensions(), (10, 5));
    }
}
