//! Error-diffusion kernel table.
//!
//! Each kernel is a fixed list of taps pointing at pixels that come later in
//! raster order, plus the divisor the tap weights are normalized by.

use std::fmt;
use std::str::FromStr;

/// One diffusion target relative to the current pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub dx: i32,
    pub dy: i32,
    pub weight: u32,
}

const fn tap(dx: i32, dy: i32, weight: u32) -> Tap {
    Tap { dx, dy, weight }
}

/// An immutable diffusion kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    pub name: KernelName,
    pub taps: &'static [Tap],
    /// Sum of all tap weights.
    pub divisor: u32,
}

impl Kernel {
    /// True when the kernel diffuses nothing and pixels are thresholded independently.
    pub fn is_identity(&self) -> bool {
        self.taps.is_empty()
    }

    /// Share of the error a tap receives: `weight / divisor`.
    pub fn tap_factor(&self, tap: &Tap) -> f32 {
        tap.weight as f32 / self.divisor as f32
    }
}

const NONE: &[Tap] = &[];

// Floyd-Steinberg:
//         *   7
//     3   5   1     (1/16)
const FLOYD_STEINBERG: &[Tap] = &[tap(1, 0, 7), tap(-1, 1, 3), tap(0, 1, 5), tap(1, 1, 1)];

// Burkes:
//             *   8   4
//     2   4   8   4   2     (1/32)
const BURKES: &[Tap] = &[
    tap(1, 0, 8),
    tap(2, 0, 4),
    tap(-2, 1, 2),
    tap(-1, 1, 4),
    tap(0, 1, 8),
    tap(1, 1, 4),
    tap(2, 1, 2),
];

// Sierra (three-row):
//             *   5   3
//     2   4   5   4   2
//         2   3   2         (1/32)
const SIERRA3: &[Tap] = &[
    tap(1, 0, 5),
    tap(2, 0, 3),
    tap(-2, 1, 2),
    tap(-1, 1, 4),
    tap(0, 1, 5),
    tap(1, 1, 4),
    tap(2, 1, 2),
    tap(-1, 2, 2),
    tap(0, 2, 3),
    tap(1, 2, 2),
];

// Sierra two-row:
//             *   4   3
//     1   2   3   2   1     (1/16)
const SIERRA2: &[Tap] = &[
    tap(1, 0, 4),
    tap(2, 0, 3),
    tap(-2, 1, 1),
    tap(-1, 1, 2),
    tap(0, 1, 3),
    tap(1, 1, 2),
    tap(2, 1, 1),
];

// Sierra Lite:
//         *   2
//     1   1         (1/4)
const SIERRA_LITE: &[Tap] = &[tap(1, 0, 2), tap(-1, 1, 1), tap(0, 1, 1)];

// Stucki:
//             *   8   4
//     2   4   8   4   2
//     1   2   4   2   1     (1/42)
const STUCKI: &[Tap] = &[
    tap(1, 0, 8),
    tap(2, 0, 4),
    tap(-2, 1, 2),
    tap(-1, 1, 4),
    tap(0, 1, 8),
    tap(1, 1, 4),
    tap(2, 1, 2),
    tap(-2, 2, 1),
    tap(-1, 2, 2),
    tap(0, 2, 4),
    tap(1, 2, 2),
    tap(2, 2, 1),
];

// Atkinson footprint with the full error spread evenly, 1/6 per neighbor.
// Classic Atkinson uses 1/8 and drops the remaining 2/8.
//         *   1   1
//     1   1   1
//         1         (1/6)
const ATKINSON: &[Tap] = &[
    tap(1, 0, 1),
    tap(2, 0, 1),
    tap(-1, 1, 1),
    tap(0, 1, 1),
    tap(1, 1, 1),
    tap(0, 2, 1),
];

/// Built-in kernel names, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelName {
    None,
    Burkes,
    FloydSteinberg,
    Sierra2,
    Sierra3,
    SierraLite,
    Stucki,
    Atkinson,
}

impl KernelName {
    pub const ALL: [KernelName; 8] = [
        KernelName::None,
        KernelName::Burkes,
        KernelName::FloydSteinberg,
        KernelName::Sierra2,
        KernelName::Sierra3,
        KernelName::SierraLite,
        KernelName::Stucki,
        KernelName::Atkinson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KernelName::None => "none",
            KernelName::Burkes => "burkes",
            KernelName::FloydSteinberg => "floydsteinberg",
            KernelName::Sierra2 => "sierra2",
            KernelName::Sierra3 => "sierra3",
            KernelName::SierraLite => "sierra_lite",
            KernelName::Stucki => "stucki",
            KernelName::Atkinson => "atkinson",
        }
    }

    /// The fixed tap table for this name.
    pub fn kernel(self) -> Kernel {
        let (taps, divisor) = match self {
            KernelName::None => (NONE, 0),
            KernelName::Burkes => (BURKES, 32),
            KernelName::FloydSteinberg => (FLOYD_STEINBERG, 16),
            KernelName::Sierra2 => (SIERRA2, 16),
            KernelName::Sierra3 => (SIERRA3, 32),
            KernelName::SierraLite => (SIERRA_LITE, 4),
            KernelName::Stucki => (STUCKI, 42),
            KernelName::Atkinson => (ATKINSON, 6),
        };
        Kernel {
            name: self,
            taps,
            divisor,
        }
    }
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup of a kernel name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dither method: {0} (expected one of: none, burkes, floydsteinberg, sierra2, sierra3, sierra_lite, stucki, atkinson)")]
pub struct UnknownKernelError(pub String);

impl UnknownKernelError {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for KernelName {
    type Err = UnknownKernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KernelName::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKernelError(s.to_string()))
    }
}

/// Look up a built-in kernel by name.
pub fn lookup(name: &str) -> Result<Kernel, UnknownKernelError> {
    name.parse::<KernelName>().map(KernelName::kernel)
}
