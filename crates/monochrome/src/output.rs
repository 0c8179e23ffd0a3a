//! Packing black/white decisions into image buffers.
//!
//! Black maps to the minimum intensity and white to the maximum, replicated
//! across color channels.

use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};

use crate::grid::BilevelImage;

const BLACK: u8 = 0;
const WHITE: u8 = 255;

fn level(white: bool) -> u8 {
    if white { WHITE } else { BLACK }
}

/// Single-channel 8-bit image containing only 0 and 255.
pub fn to_gray_image(img: &BilevelImage) -> GrayImage {
    let (width, height) = img.dimensions();
    GrayImage::from_fn(width, height, |x, y| Luma([level(img.is_white(x, y))]))
}

/// Opaque RGBA image with equal color channels.
pub fn to_rgba_image(img: &BilevelImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    RgbaImage::from_fn(width, height, |x, y| {
        let v = level(img.is_white(x, y));
        Rgba([v, v, v, WHITE])
    })
}

pub fn to_dynamic_image(img: &BilevelImage) -> DynamicImage {
    DynamicImage::ImageLuma8(to_gray_image(img))
}

/// Pack decisions at one bit per pixel, most significant bit first.
///
/// Each row starts on a fresh byte; a set bit is white.
pub fn pack_rows(img: &BilevelImage) -> Vec<u8> {
    let (width, height) = img.dimensions();
    let stride = (width as usize).div_ceil(8);
    let mut out = vec![0u8; stride * height as usize];

    for y in 0..height {
        let base = y as usize * stride;
        for (x, &white) in img.row(y).iter().enumerate() {
            if white {
                out[base + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    out
}

/// Read back a grayscale buffer; values at or above 128 are white.
pub fn from_gray_image(img: &GrayImage) -> BilevelImage {
    let (width, height) = img.dimensions();
    let bits = img.pixels().map(|p| p.0[0] >= 128).collect();
    BilevelImage::from_bits(width, height, bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> BilevelImage {
        let bits = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x + y) % 2 == 0))
            .collect();
        BilevelImage::from_bits(width, height, bits)
    }

    #[test]
    fn test_gray_levels() {
        let gray = to_gray_image(&checker(3, 2));
        assert_eq!(gray.dimensions(), (3, 2));
        assert_eq!(gray.get_pixel(0, 0).0, [255]);
        assert_eq!(gray.get_pixel(1, 0).0, [0]);
        assert_eq!(gray.get_pixel(0, 1).0, [0]);
        assert!(gray.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_rgba_replicates_channels() {
        let rgba = to_rgba_image(&checker(2, 1));
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(rgba.get_pixel(1, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_dynamic_image_is_luma8() {
        let img = to_dynamic_image(&checker(4, 4));
        assert!(matches!(img, DynamicImage::ImageLuma8(_)));
        assert_eq!((img.width(), img.height()), (4, 4));
    }

    #[test]
    fn test_pack_rows_msb_first_with_padding() {
        // 10 wide -> 2 bytes per row.
        let img = checker(10, 2);
        let packed = pack_rows(&img);
        assert_eq!(packed.len(), 4);
        assert_eq!(packed[0], 0b1010_1010);
        assert_eq!(packed[1], 0b1000_0000);
        assert_eq!(packed[2], 0b0101_0101);
        assert_eq!(packed[3], 0b0100_0000);
    }

    #[test]
    fn test_gray_round_trip() {
        let img = checker(7, 5);
        assert_eq!(from_gray_image(&to_gray_image(&img)), img);
    }
}
