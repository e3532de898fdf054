//! Watershed region growing
//!
//! Priority-ordered flood fill from seed points. The grayscale raster is
//! treated as a topographic surface: seeds are labeled, then the frontier
//! repeatedly pops its lowest-intensity candidate and claims the candidate's
//! unlabeled 4-connected neighbors, bounded above by a fill ceiling and
//! optionally gated by a bit mask.
//!
//! Labels are write-once: a pixel claimed by one region is never relabeled,
//! so competing basins meet along first-come boundaries under the priority
//! order. Pixels above the ceiling, forbidden by the mask, or unreachable
//! from any seed keep label 0.
//!
//! # See also
//!
//! image-js: `createROIMapFromWaterShed()` in
//! `src/image/roi/creator/fromWaterShed.js`

use crate::error::{RegionError, RegionResult};
use crate::extrema::{Connectivity, check_processable, find_local_minima};
use crate::frontier::PriorityFrontier;
use crate::region_map::RegionMap;
use imago_core::{BitMask, Raster};

/// Neighbor order: +x, +y, -x, -y (no diagonals)
const DX: [i32; 4] = [1, 0, -1, 0];
const DY: [i32; 4] = [0, 1, 0, -1];

/// A watershed seed point
///
/// The engine assigns labels by the seed's position in the input slice
/// (1-based), not by `id`. The `id` field is carried for the caller's
/// bookkeeping only and never influences the output label buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPoint {
    /// Column of the seed pixel
    pub x: u32,
    /// Row of the seed pixel
    pub y: u32,
    /// Caller-supplied identifier, informational only
    pub id: i32,
}

impl SeedPoint {
    /// Create a new seed point.
    pub fn new(x: u32, y: u32, id: i32) -> Self {
        Self { x, y, id }
    }
}

/// Options for watershed region growing
///
/// # Examples
///
/// ```
/// use imago_region::{SeedPoint, WatershedOptions};
///
/// let seeds = [SeedPoint::new(2, 3, 1)];
/// let options = WatershedOptions::new()
///     .with_seeds(&seeds)
///     .with_fill_ceiling(32000);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WatershedOptions<'a> {
    /// Seed points; when `None` the engine seeds from local minima
    pub seeds: Option<&'a [SeedPoint]>,
    /// Growth mask; a set bit permits growth into that pixel
    pub mask: Option<&'a BitMask>,
    /// Maximum intensity eligible for labeling; defaults to the raster's
    /// maximum representable value
    pub fill_ceiling: Option<u16>,
}

impl<'a> WatershedOptions<'a> {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit seed points.
    pub fn with_seeds(mut self, seeds: &'a [SeedPoint]) -> Self {
        self.seeds = Some(seeds);
        self
    }

    /// Set a growth mask.
    pub fn with_mask(mut self, mask: &'a BitMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the fill ceiling.
    pub fn with_fill_ceiling(mut self, fill_ceiling: u16) -> Self {
        self.fill_ceiling = Some(fill_ceiling);
        self
    }
}

/// Grow labeled regions from seed points over a grayscale raster.
///
/// Labels are 1-based seed indices; see [`SeedPoint`] for the positional
/// contract. When `options.seeds` is `None`, seeds are detected with
/// [`find_local_minima`], passing the mask through unchanged. An explicit
/// empty seed slice yields an all-background map.
///
/// A seed pixel always receives its label, but is enqueued for growth only
/// when its own intensity is within the ceiling.
///
/// # Errors
///
/// Fails before any processing on a non-grayscale or non-8/16-bit raster
/// ([`RegionError::UnsupportedKind`] / [`RegionError::UnsupportedDepth`]),
/// a mask of mismatched dimensions ([`RegionError::MaskSizeMismatch`]), or
/// an out-of-bounds seed ([`RegionError::InvalidSeed`]). No partially
/// filled label buffer is ever returned.
pub fn watershed(raster: &Raster, options: &WatershedOptions) -> RegionResult<RegionMap> {
    check_processable(raster, options.mask)?;

    let detected;
    let seeds: &[SeedPoint] = match options.seeds {
        Some(seeds) => seeds,
        None => {
            detected = find_local_minima(raster, options.mask, Connectivity::default())?;
            &detected
        }
    };

    let w = raster.width();
    let h = raster.height();
    for seed in seeds {
        if seed.x >= w || seed.y >= h {
            return Err(RegionError::InvalidSeed {
                x: seed.x,
                y: seed.y,
            });
        }
    }

    let fill_ceiling = options.fill_ceiling.unwrap_or(raster.max_value());
    let mask = options.mask;

    let mut labels = vec![0i32; raster.size()];
    let mut frontier = PriorityFrontier::new();

    for (i, seed) in seeds.iter().enumerate() {
        labels[raster.index(seed.x, seed.y)] = i as i32 + 1;
        let intensity = raster.get_unchecked(seed.x, seed.y);
        if intensity <= fill_ceiling {
            frontier.push(seed.x, seed.y, intensity);
        }
    }

    while let Some((x, y, _)) = frontier.pop() {
        let label = labels[raster.index(x, y)];

        for dir in 0..4 {
            let nx = x as i64 + DX[dir] as i64;
            let ny = y as i64 + DY[dir] as i64;
            if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);

            if let Some(mask) = mask {
                if !mask.get(nx, ny) {
                    continue;
                }
            }
            let intensity = raster.get_unchecked(nx, ny);
            if intensity > fill_ceiling {
                continue;
            }
            let slot = &mut labels[raster.index(nx, ny)];
            if *slot != 0 {
                // Write-once: a labeled pixel is never relabeled
                continue;
            }
            *slot = label;
            frontier.push(nx, ny, intensity);
        }
    }

    RegionMap::new(raster.clone(), labels)
}
