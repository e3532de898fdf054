//! Region map - the watershed output entity
//!
//! Wraps the source raster together with the label buffer produced by a
//! watershed run. Region membership is derived lazily from the buffer: all
//! pixels sharing a positive label form one region, label 0 is the unfilled
//! background.
//!
//! # See also
//!
//! image-js: `ROIMap` in `src/image/roi/ROIMap.js`

use crate::error::RegionResult;
use imago_core::{Error, Raster};

/// Immutable (raster, label buffer) pair
///
/// The raster handle is an `Arc` clone, so constructing a `RegionMap` never
/// copies pixel data. There is no mutation surface.
#[derive(Debug, Clone)]
pub struct RegionMap {
    raster: Raster,
    labels: Vec<i32>,
}

impl RegionMap {
    /// Wrap a raster and its label buffer.
    ///
    /// # Errors
    ///
    /// Returns a core [`Error::BufferSizeMismatch`] if the buffer length
    /// does not equal `width * height`. Never fails on well-formed input.
    pub fn new(raster: Raster, labels: Vec<i32>) -> RegionResult<Self> {
        let expected = raster.size();
        if labels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: labels.len(),
            }
            .into());
        }
        Ok(Self { raster, labels })
    }

    /// Get the map width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Get the map height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Get the source raster.
    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Get the label buffer, one slot per pixel, row-major.
    #[inline]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Get the label at (x, y), or `None` out of bounds.
    pub fn label_at(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.raster.width() || y >= self.raster.height() {
            return None;
        }
        Some(self.labels[self.raster.index(x, y)])
    }

    /// Number of regions: the maximum positive label in the buffer.
    ///
    /// Labels are 1-based seed indices, so this equals the seed count when
    /// every seed claimed at least its own pixel.
    pub fn region_count(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0).max(0) as u32
    }

    /// Coordinates of all pixels bearing `label`.
    ///
    /// Passing 0 returns the unfilled background set. Membership is derived
    /// from the buffer on each call; the map itself stores nothing per
    /// region.
    pub fn region_pixels(&self, label: i32) -> Vec<(u32, u32)> {
        let w = self.raster.width();
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(idx, _)| ((idx as u32) % w, (idx as u32) / w))
            .collect()
    }

    /// Coordinates of all unfilled background pixels (label 0).
    pub fn background_pixels(&self) -> Vec<(u32, u32)> {
        self.region_pixels(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imago_core::{BitDepth, RasterKind};

    fn grey8(width: u32, height: u32) -> Raster {
        Raster::new(width, height, RasterKind::Grey, BitDepth::Bit8).unwrap()
    }

    #[test]
    fn test_buffer_length_validated() {
        let raster = grey8(3, 2);
        assert!(RegionMap::new(raster.clone(), vec![0; 5]).is_err());
        assert!(RegionMap::new(raster, vec![0; 6]).is_ok());
    }

    #[test]
    fn test_region_membership() {
        let raster = grey8(3, 2);
        #[rustfmt::skip]
        let labels = vec![
            1, 1, 0,
            2, 2, 2,
        ];
        let map = RegionMap::new(raster, labels).unwrap();

        assert_eq!(map.region_count(), 2);
        assert_eq!(map.region_pixels(1), vec![(0, 0), (1, 0)]);
        assert_eq!(map.region_pixels(2), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(map.background_pixels(), vec![(2, 0)]);
        assert!(map.region_pixels(3).is_empty());
    }

    #[test]
    fn test_label_at_bounds() {
        let raster = grey8(2, 2);
        let map = RegionMap::new(raster, vec![0, 1, 2, 0]).unwrap();
        assert_eq!(map.label_at(1, 0), Some(1));
        assert_eq!(map.label_at(0, 1), Some(2));
        assert_eq!(map.label_at(2, 0), None);
    }

    #[test]
    fn test_all_background() {
        let raster = grey8(2, 2);
        let map = RegionMap::new(raster, vec![0; 4]).unwrap();
        assert_eq!(map.region_count(), 0);
        assert_eq!(map.background_pixels().len(), 4);
    }
}
