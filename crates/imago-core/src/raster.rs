//! Raster - the main image container
//!
//! The `Raster` structure is the fundamental image type in imago.
//! It holds a dense buffer of integer samples together with the declared
//! geometry (width, height), kind (binary, grayscale, color) and bit depth.
//!
//! # Sample layout
//!
//! - One `u16` sample slot per channel per pixel, row-major
//! - Buffer length is always `width * height * channels`
//! - Binary rasters store samples as 0/1 at depth 1
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify sample data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.
//!
//! # See also
//!
//! image-js: the `Image` class in `src/image/Image.js` (width, height,
//! `kind`, `bitDepth`, `data`, `maxValue`)

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bit depth (bits per sample)
///
/// Bounds the valid sample range: `[0, 2^bits - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BitDepth {
    /// 1-bit samples (binary rasters)
    Bit1 = 1,
    /// 8-bit samples
    Bit8 = 8,
    /// 16-bit samples
    Bit16 = 16,
}

impl BitDepth {
    /// Create `BitDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 1, 8, or 16.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(BitDepth::Bit1),
            8 => Ok(BitDepth::Bit8),
            16 => Ok(BitDepth::Bit16),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per sample.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum sample value representable at this depth.
    pub fn max_value(self) -> u16 {
        ((1u32 << self.bits()) - 1) as u16
    }
}

/// Raster kind
///
/// Declares how the sample buffer is to be interpreted. The kind fixes the
/// channel count; the bit depth fixes the per-channel sample range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterKind {
    /// Binary raster, one 0/1 sample per pixel
    Binary,
    /// Single-channel grayscale raster
    Grey,
    /// Three-channel color raster
    Rgb,
    /// Four-channel color raster with alpha
    Rgba,
}

impl RasterKind {
    /// Get the number of channels (samples per pixel).
    pub fn channels(self) -> u32 {
        match self {
            RasterKind::Binary | RasterKind::Grey => 1,
            RasterKind::Rgb => 3,
            RasterKind::Rgba => 4,
        }
    }

    /// Check whether `depth` is a valid bit depth for this kind.
    ///
    /// Binary rasters are 1-bit; grayscale rasters are 8 or 16 bits;
    /// color rasters are 8 bits per channel.
    pub fn supports_depth(self, depth: BitDepth) -> bool {
        match self {
            RasterKind::Binary => depth == BitDepth::Bit1,
            RasterKind::Grey => matches!(depth, BitDepth::Bit8 | BitDepth::Bit16),
            RasterKind::Rgb | RasterKind::Rgba => depth == BitDepth::Bit8,
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Interpretation of the sample buffer
    kind: RasterKind,
    /// Bits per sample
    depth: BitDepth,
    /// The sample data, row-major, channel-interleaved
    data: Vec<u16>,
}

/// Raster - main image container
///
/// `Raster` is the fundamental image type in imago. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use imago_core::{Raster, RasterKind, BitDepth};
///
/// // Create a new 8-bit grayscale raster
/// let raster = Raster::new(640, 480, RasterKind::Grey, BitDepth::Bit8).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.max_value(), 255);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions, kind and depth.
    ///
    /// The sample data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::KindDepthMismatch`] if the depth is not valid for the kind.
    pub fn new(width: u32, height: u32, kind: RasterKind, depth: BitDepth) -> Result<Self> {
        Self::check_geometry(width, height, kind, depth)?;

        let len = (width as usize) * (height as usize) * (kind.channels() as usize);
        let data = vec![0u16; len];

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                kind,
                depth,
                data,
            }),
        })
    }

    /// Create a raster from an existing sample buffer.
    ///
    /// The buffer is row-major with channels interleaved, one slot per
    /// sample, exactly as [`Raster::samples`] exposes it.
    ///
    /// # Errors
    ///
    /// In addition to the [`Raster::new`] errors, returns
    /// [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * channels` and [`Error::SampleOutOfRange`] if any
    /// sample exceeds the declared depth.
    pub fn from_samples(
        width: u32,
        height: u32,
        kind: RasterKind,
        depth: BitDepth,
        data: Vec<u16>,
    ) -> Result<Self> {
        Self::check_geometry(width, height, kind, depth)?;

        let expected = (width as usize) * (height as usize) * (kind.channels() as usize);
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let max = depth.max_value();
        if let Some(&value) = data.iter().find(|&&v| v > max) {
            return Err(Error::SampleOutOfRange { value, max });
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                kind,
                depth,
                data,
            }),
        })
    }

    fn check_geometry(width: u32, height: u32, kind: RasterKind, depth: BitDepth) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if !kind.supports_depth(depth) {
            return Err(Error::KindDepthMismatch { kind, depth });
        }
        Ok(())
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the raster kind.
    #[inline]
    pub fn kind(&self) -> RasterKind {
        self.inner.kind
    }

    /// Get the bit depth.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.inner.depth
    }

    /// Get the number of channels (samples per pixel).
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.kind.channels()
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn size(&self) -> usize {
        (self.inner.width as usize) * (self.inner.height as usize)
    }

    /// Get the maximum sample value for this raster's depth.
    #[inline]
    pub fn max_value(&self) -> u16 {
        self.inner.depth.max_value()
    }

    /// Get the raw sample buffer.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.inner.data
    }

    /// Linear pixel index of (x, y).
    ///
    /// For multi-channel rasters the first sample of the pixel sits at
    /// `index * channels`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.inner.width as usize) + (x as usize)
    }

    /// Get the first-channel sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the first-channel sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u16 {
        let channels = self.inner.kind.channels() as usize;
        self.inner.data[self.index(x, y) * channels]
    }

    /// Convert into a mutable raster, cloning the data only if shared.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            width: self.inner.width,
            height: self.inner.height,
            kind: self.inner.kind,
            depth: self.inner.depth,
            data: self.inner.data.clone(),
        }
    }

    /// Convert into a mutable raster without copying.
    ///
    /// Fails with `Err(self)` when the data is shared with another handle.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Raster> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut {
                width: data.width,
                height: data.height,
                kind: data.kind,
                depth: data.depth,
                data: data.data,
            }),
            Err(inner) => Err(Raster { inner }),
        }
    }
}

/// Mutable raster
///
/// Exclusive-ownership counterpart of [`Raster`]. Obtained via
/// [`Raster::try_into_mut`] or [`Raster::to_mut`]; converted back with
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    width: u32,
    height: u32,
    kind: RasterKind,
    depth: BitDepth,
    data: Vec<u16>,
}

impl RasterMut {
    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raster kind.
    #[inline]
    pub fn kind(&self) -> RasterKind {
        self.kind
    }

    /// Get the bit depth.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the maximum sample value for this raster's depth.
    #[inline]
    pub fn max_value(&self) -> u16 {
        self.depth.max_value()
    }

    /// Get the raw sample buffer.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.data
    }

    /// Get the raw sample buffer mutably.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    /// Get the first-channel sample at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.kind.channels() as usize;
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.data[index * channels])
    }

    /// Set the first-channel sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for out-of-bounds coordinates and
    /// [`Error::SampleOutOfRange`] for values above the depth maximum.
    pub fn set(&mut self, x: u32, y: u32, value: u16) -> Result<()> {
        if x >= self.width || y >= self.height {
            let index = (y as usize) * (self.width as usize) + (x as usize);
            return Err(Error::IndexOutOfBounds {
                index,
                len: (self.width as usize) * (self.height as usize),
            });
        }
        let max = self.depth.max_value();
        if value > max {
            return Err(Error::SampleOutOfRange { value, max });
        }
        self.set_unchecked(x, y, value);
        Ok(())
    }

    /// Set the first-channel sample at (x, y) without checks.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u16) {
        let channels = self.kind.channels() as usize;
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.data[index * channels] = value;
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: raster.width,
                height: raster.height,
                kind: raster.kind,
                depth: raster.depth,
                data: raster.data,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let raster = Raster::new(4, 3, RasterKind::Grey, BitDepth::Bit8).unwrap();
        assert_eq!(raster.samples().len(), 12);
        assert!(raster.samples().iter().all(|&v| v == 0));
        assert_eq!(raster.channels(), 1);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Raster::new(0, 3, RasterKind::Grey, BitDepth::Bit8).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { width: 0, height: 3 }));
    }

    #[test]
    fn test_kind_depth_mismatch() {
        let err = Raster::new(4, 4, RasterKind::Binary, BitDepth::Bit8).unwrap_err();
        assert!(matches!(err, Error::KindDepthMismatch { .. }));

        let err = Raster::new(4, 4, RasterKind::Rgb, BitDepth::Bit16).unwrap_err();
        assert!(matches!(err, Error::KindDepthMismatch { .. }));
    }

    #[test]
    fn test_from_samples_length_check() {
        let err = Raster::from_samples(3, 3, RasterKind::Grey, BitDepth::Bit8, vec![0; 8])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 9,
                actual: 8
            }
        ));

        // Rgb needs width * height * 3 samples
        let raster =
            Raster::from_samples(2, 2, RasterKind::Rgb, BitDepth::Bit8, vec![0; 12]).unwrap();
        assert_eq!(raster.channels(), 3);
    }

    #[test]
    fn test_from_samples_range_check() {
        let err = Raster::from_samples(2, 1, RasterKind::Binary, BitDepth::Bit1, vec![0, 2])
            .unwrap_err();
        assert!(matches!(err, Error::SampleOutOfRange { value: 2, max: 1 }));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let raster = Raster::new(5, 5, RasterKind::Grey, BitDepth::Bit16).unwrap();
        let mut raster_mut = raster.try_into_mut().unwrap();
        raster_mut.set(2, 3, 40000).unwrap();

        let raster: Raster = raster_mut.into();
        assert_eq!(raster.get(2, 3), Some(40000));
        assert_eq!(raster.get(0, 0), Some(0));
        assert_eq!(raster.get(5, 0), None);
    }

    #[test]
    fn test_try_into_mut_shared() {
        let raster = Raster::new(2, 2, RasterKind::Grey, BitDepth::Bit8).unwrap();
        let handle = raster.clone();
        // Shared data cannot be unwrapped in place
        assert!(raster.try_into_mut().is_err());
        // to_mut always works via copy
        let mut copy = handle.to_mut();
        copy.set(0, 0, 7).unwrap();
        assert_eq!(handle.get(0, 0), Some(0));
    }

    #[test]
    fn test_max_value_per_depth() {
        assert_eq!(BitDepth::Bit1.max_value(), 1);
        assert_eq!(BitDepth::Bit8.max_value(), 255);
        assert_eq!(BitDepth::Bit16.max_value(), 65535);
    }

    #[test]
    fn test_set_out_of_range() {
        let raster = Raster::new(2, 2, RasterKind::Grey, BitDepth::Bit8).unwrap();
        let mut raster_mut = raster.try_into_mut().unwrap();
        assert!(raster_mut.set(0, 0, 256).is_err());
        assert!(raster_mut.set(2, 0, 1).is_err());
    }
}
