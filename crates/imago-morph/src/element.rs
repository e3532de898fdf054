//! Structuring element for morphological operations
//!
//! A structuring element defines the neighborhood footprint used in
//! morphological operations. Entries that are `false` ("holes") are ignored
//! by the operation, so arbitrary footprint shapes are possible.
//!
//! # Anchor convention
//!
//! The anchor is always the floor-centered position
//! `(width / 2, height / 2)` (integer division). For odd dimensions this is
//! the geometric center; for even dimensions it is the upper-left of the two
//! central candidates. The anchor is fixed at construction and cannot move.

use crate::{MorphError, MorphResult};

/// Structuring element
///
/// A rectangular grid of booleans with an implicit floor-centered anchor.
/// `true` entries participate in the operation; `false` entries are holes.
///
/// # Examples
///
/// ```
/// use imago_morph::StructElement;
///
/// // 3x3 ring: all neighbors participate, the center does not
/// let sel = StructElement::from_rows(&[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]]).unwrap();
/// assert_eq!(sel.hit_count(), 8);
/// assert_eq!((sel.anchor_x(), sel.anchor_y()), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct StructElement {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<bool>,
}

impl StructElement {
    /// Create a new structuring element with all entries cleared.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "zero-sized dimensions: {width}x{height}"
            )));
        }
        Ok(StructElement {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![false; (width as usize) * (height as usize)],
        })
    }

    /// Create a rectangular "brick" structuring element with all entries set.
    pub fn brick(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        sel.data.fill(true);
        Ok(sel)
    }

    /// Create a square structuring element with all entries set.
    pub fn square(size: u32) -> MorphResult<Self> {
        Self::brick(size, size)
    }

    /// Create a structuring element from rows of 0/1 values.
    ///
    /// Any nonzero entry is a hit. Rows must be nonempty and of equal
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] for an empty grid or ragged rows.
    pub fn from_rows(rows: &[&[u8]]) -> MorphResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut sel = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.len() as u32 != width {
                return Err(MorphError::InvalidSel(format!(
                    "ragged rows: row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for (x, &value) in row.iter().enumerate() {
                sel.data[y * width as usize + x] = value != 0;
            }
        }
        Ok(sel)
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the anchor x coordinate (`width / 2`).
    #[inline]
    pub fn anchor_x(&self) -> u32 {
        self.cx
    }

    /// Get the anchor y coordinate (`height / 2`).
    #[inline]
    pub fn anchor_y(&self) -> u32 {
        self.cy
    }

    /// Get the entry at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set the entry at (x, y). Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, hit: bool) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = hit;
        }
    }

    /// Count the set entries.
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&hit| hit).count()
    }

    /// Iterate over hit positions relative to the anchor.
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data.iter().enumerate().filter_map(move |(idx, &hit)| {
            if hit {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                Some((x - cx, y - cy))
            } else {
                None
            }
        })
    }
}
