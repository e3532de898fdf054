//! Bit-per-pixel mask
//!
//! A `BitMask` gates which pixels an operation is allowed to touch: a set
//! bit permits the pixel, an unset bit forbids it. Masks carry the same
//! width and height as the raster they apply to.
//!
//! # Bit packing
//!
//! Bits are packed MSB-to-LSB within 32-bit words; every row starts on a
//! word boundary. Pixel 0 of a row occupies bit 31 of the row's first word.
//!
//! # See also
//!
//! image-js: mask images with `bitDepth: 1` accessed through `getBit()` /
//! `setBit()`

use crate::error::{Error, Result};

/// Get a 1-bit value from a packed row.
///
/// Bits are packed MSB to LSB within each 32-bit word.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

/// Set a 1-bit value in a packed row.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 5) as usize];
    let shift = 31 - (x & 31);
    *word = (*word & !(1 << shift)) | ((val & 1) << shift);
}

/// Bit-per-pixel mask with word-packed storage
///
/// # Examples
///
/// ```
/// use imago_core::BitMask;
///
/// let mut mask = BitMask::new(40, 2).unwrap();
/// mask.set(33, 1, true);
/// assert!(mask.get(33, 1));
/// assert!(!mask.get(0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct BitMask {
    width: u32,
    height: u32,
    /// 32-bit words per row
    wpl: u32,
    words: Vec<u32>,
}

impl BitMask {
    /// Create a mask with all bits cleared (everything forbidden).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = width.div_ceil(32);
        let words = vec![0u32; (wpl as usize) * (height as usize)];
        Ok(BitMask {
            width,
            height,
            wpl,
            words,
        })
    }

    /// Create a mask with all bits set (everything permitted).
    pub fn filled(width: u32, height: u32) -> Result<Self> {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                mask.set(x, y, true);
            }
        }
        Ok(mask)
    }

    /// Get the mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the bit at (x, y).
    ///
    /// Out-of-bounds coordinates read as unset (forbidden).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let row = (y as usize) * (self.wpl as usize);
        get_data_bit(&self.words[row..row + self.wpl as usize], x) != 0
    }

    /// Set the bit at (x, y).
    ///
    /// Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let row = (y as usize) * (self.wpl as usize);
        set_data_bit(
            &mut self.words[row..row + self.wpl as usize],
            x,
            val as u32,
        );
    }

    /// Count the set bits.
    pub fn count_set(&self) -> usize {
        // Rows are word-aligned and padding bits are never set, so a
        // popcount over the words is exact.
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_first_packing() {
        let mut line = vec![0u32; 2];
        set_data_bit(&mut line, 0, 1);
        assert_eq!(line[0], 0x8000_0000);
        set_data_bit(&mut line, 31, 1);
        assert_eq!(line[0], 0x8000_0001);
        set_data_bit(&mut line, 32, 1);
        assert_eq!(line[1], 0x8000_0000);
        set_data_bit(&mut line, 0, 0);
        assert_eq!(get_data_bit(&line, 0), 0);
        assert_eq!(get_data_bit(&line, 31), 1);
    }

    #[test]
    fn test_new_cleared() {
        let mask = BitMask::new(70, 3).unwrap();
        assert_eq!(mask.count_set(), 0);
        assert!(!mask.get(69, 2));
    }

    #[test]
    fn test_filled() {
        let mask = BitMask::filled(70, 3).unwrap();
        assert_eq!(mask.count_set(), 210);
        assert!(mask.get(69, 2));
        // Padding bits beyond the width stay clear
        assert!(!mask.get(70, 0));
    }

    #[test]
    fn test_set_get_across_word_boundary() {
        let mut mask = BitMask::new(100, 2).unwrap();
        for x in [0, 31, 32, 63, 64, 99] {
            mask.set(x, 1, true);
            assert!(mask.get(x, 1), "bit {x} should be set");
            assert!(!mask.get(x, 0));
        }
        assert_eq!(mask.count_set(), 6);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(BitMask::new(0, 5).is_err());
        assert!(BitMask::new(5, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds_reads_unset() {
        let mask = BitMask::filled(8, 8).unwrap();
        assert!(!mask.get(8, 0));
        assert!(!mask.get(0, 8));
    }
}
