//! Local minima detection
//!
//! Supplies seed points for the watershed engine when the caller does not
//! provide any. A pixel is reported as a local minimum when every in-bounds
//! (and unmasked) neighbor under the chosen connectivity has a strictly
//! greater value; plateau pixels are never reported.
//!
//! # See also
//!
//! image-js: `getLocalExtrema({ algorithm: 'min', mask })` in
//! `src/image/compute/getLocalExtrema.js`

use crate::error::{RegionError, RegionResult};
use crate::watershed::SeedPoint;
use imago_core::{BitDepth, BitMask, Raster, RasterKind};

/// Connectivity for neighborhood scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl Connectivity {
    /// Neighbor offsets for this connectivity.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::FourWay => &[(1, 0), (0, 1), (-1, 0), (0, -1)],
            Connectivity::EightWay => &[
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1),
            ],
        }
    }
}

/// Find local minima in a grayscale raster.
///
/// Pixels forbidden by `mask` are skipped and do not take part in any
/// neighborhood comparison. Returned seeds are ordered row-major and carry
/// an informational `id` equal to their 1-based position.
///
/// # Errors
///
/// Same preconditions as the watershed engine: single-channel grayscale,
/// depth 8 or 16; mask dimensions must match the raster.
pub fn find_local_minima(
    raster: &Raster,
    mask: Option<&BitMask>,
    connectivity: Connectivity,
) -> RegionResult<Vec<SeedPoint>> {
    check_processable(raster, mask)?;

    let w = raster.width();
    let h = raster.height();
    let offsets = connectivity.offsets();
    let mut seeds = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if let Some(mask) = mask {
                if !mask.get(x, y) {
                    continue;
                }
            }
            let value = raster.get_unchecked(x, y);

            let is_minimum = offsets.iter().all(|&(dx, dy)| {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                    return true;
                }
                let (nx, ny) = (nx as u32, ny as u32);
                if let Some(mask) = mask {
                    if !mask.get(nx, ny) {
                        return true;
                    }
                }
                raster.get_unchecked(nx, ny) > value
            });

            if is_minimum {
                let id = seeds.len() as i32 + 1;
                seeds.push(SeedPoint::new(x, y, id));
            }
        }
    }

    Ok(seeds)
}

pub(crate) fn check_processable(raster: &Raster, mask: Option<&BitMask>) -> RegionResult<()> {
    if raster.kind() != RasterKind::Grey {
        return Err(RegionError::UnsupportedKind {
            expected: "single-channel grayscale",
            actual: raster.kind(),
        });
    }
    if !matches!(raster.depth(), BitDepth::Bit8 | BitDepth::Bit16) {
        return Err(RegionError::UnsupportedDepth {
            expected: "8 or 16",
            actual: raster.depth().bits(),
        });
    }
    if let Some(mask) = mask {
        if mask.width() != raster.width() || mask.height() != raster.height() {
            return Err(RegionError::MaskSizeMismatch {
                expected: (raster.width(), raster.height()),
                actual: (mask.width(), mask.height()),
            });
        }
    }
    Ok(())
}
