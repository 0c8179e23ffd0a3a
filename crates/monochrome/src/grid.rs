//! Pixel buffers flowing through a dithering pass.

use crate::DitherError;

/// Row-major grid of normalized luminance values.
///
/// Values start in `[0, 1]` but may leave that range once error has been
/// diffused into them.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl PixelGrid {
    /// Create a grid filled with `value`.
    pub fn from_value(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap a row-major vector of luminance values.
    pub fn from_vec(width: u32, height: u32, data: Vec<f32>) -> Result<Self, DitherError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(DitherError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[self.index(x, y)]
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Add `delta` at `(x + dx, y + dy)`, dropping it if the target is off the grid.
    pub(crate) fn add_offset(&mut self, x: u32, y: u32, dx: i32, dy: i32, delta: f32) {
        let tx = i64::from(x) + i64::from(dx);
        let ty = i64::from(y) + i64::from(dy);
        if tx < 0 || ty < 0 || tx >= i64::from(self.width) || ty >= i64::from(self.height) {
            return;
        }
        let idx = self.index(tx as u32, ty as u32);
        self.data[idx] += delta;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Row-major black/white decisions; `true` is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilevelImage {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BilevelImage {
    pub(crate) fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Self {
        debug_assert_eq!(bits.len(), width as usize * height as usize);
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// All decisions in raster order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// One row of decisions.
    pub fn row(&self, y: u32) -> &[bool] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.bits[start..start + w]
    }

    pub fn white_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}
