//! Erosion for binary and grayscale rasters
//!
//! Erosion shrinks foreground regions: the output sample at each pixel is
//! the minimum source sample over the structuring element footprint. For
//! binary rasters (samples 0/1) the minimum reduces to a logical AND over
//! the footprint, so one accumulation path serves both kinds.
//!
//! # Border policy
//!
//! Footprint offsets landing outside the raster do not participate: the
//! minimum is taken over the in-bounds part of the footprint only. A border
//! pixel whose in-bounds neighbors are all foreground therefore stays
//! foreground. This matches image-js's documented test vectors (`10111`
//! rows erode to `00011`, not `00000`).
//!
//! # See also
//!
//! image-js: `erode()` in `src/image/morphology/erode.js`

use crate::element::StructElement;
use crate::error::{MorphError, MorphResult};
use imago_core::{Raster, RasterKind};

/// Erode a raster once with the given structuring element.
///
/// Accepts binary and grayscale rasters of any supported depth. The input
/// is untouched; a new raster of identical geometry is returned.
///
/// A pixel whose in-bounds footprint is empty (possible only when the
/// element has no hits) keeps the accumulator identity,
/// `raster.max_value()`.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedKind`] for multi-channel rasters.
pub fn erode(raster: &Raster, sel: &StructElement) -> MorphResult<Raster> {
    check_erodable(raster)?;

    let w = raster.width();
    let h = raster.height();

    let out = Raster::new(w, h, raster.kind(), raster.depth())?;
    let mut out_mut = out.try_into_mut().unwrap();

    let hit_offsets: Vec<_> = sel.hit_offsets().collect();
    let identity = raster.max_value();

    for y in 0..h {
        for x in 0..w {
            let mut min = identity;
            for &(dx, dy) in &hit_offsets {
                let sx = x as i64 + dx as i64;
                let sy = y as i64 + dy as i64;
                if sx < 0 || sx >= w as i64 || sy < 0 || sy >= h as i64 {
                    continue;
                }
                let value = raster.get_unchecked(sx as u32, sy as u32);
                if value < min {
                    min = value;
                    if min == 0 {
                        break;
                    }
                }
            }
            out_mut.set_unchecked(x, y, min);
        }
    }

    Ok(out_mut.into())
}

/// Erode a raster `iterations` times with the given structuring element.
///
/// Each pass consumes the previous pass's output. This is not equivalent to
/// a single erosion with an enlarged element unless the element is
/// symmetric about its anchor; the sequential semantics are preserved
/// literally. `iterations == 0` returns an unmodified copy.
pub fn erode_iter(raster: &Raster, sel: &StructElement, iterations: u32) -> MorphResult<Raster> {
    check_erodable(raster)?;

    let mut current = raster.clone();
    for _ in 0..iterations {
        current = erode(&current, sel)?;
    }
    Ok(current)
}

/// Erode once with the default 3x3 all-true structuring element.
pub fn erode_default(raster: &Raster) -> MorphResult<Raster> {
    let sel = StructElement::brick(3, 3)?;
    erode(raster, &sel)
}

/// Erode `iterations` times with the default 3x3 structuring element.
pub fn erode_default_iter(raster: &Raster, iterations: u32) -> MorphResult<Raster> {
    let sel = StructElement::brick(3, 3)?;
    erode_iter(raster, &sel, iterations)
}

fn check_erodable(raster: &Raster) -> MorphResult<()> {
    match raster.kind() {
        RasterKind::Binary | RasterKind::Grey => Ok(()),
        kind => Err(MorphError::UnsupportedKind {
            expected: "binary or grayscale",
            actual: kind,
        }),
    }
}
