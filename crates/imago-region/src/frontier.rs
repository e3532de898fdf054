//! Priority frontier for region growing
//!
//! A min-ordered queue of pending candidate pixels keyed by intensity.
//! The watershed engine pops the lowest-intensity candidate first so that
//! growth approximates a topographic flood from low to high.
//!
//! Equal-intensity candidates pop in insertion order: every entry carries
//! an insertion sequence number as a secondary ordering key, so the pop
//! order is fully deterministic and does not depend on heap internals.
//!
//! # See also
//!
//! image-js: the `js-priority-queue` binary heap in
//! `src/image/roi/creator/fromWaterShed.js` (comparator on intensity only,
//! with unspecified tie order)

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One pending candidate pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    intensity: u16,
    /// Insertion sequence, the deterministic tie-break for equal intensities
    seq: u64,
    x: u32,
    y: u32,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.intensity
            .cmp(&other.intensity)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered frontier of candidate pixels keyed by intensity
///
/// # Examples
///
/// ```
/// use imago_region::PriorityFrontier;
///
/// let mut frontier = PriorityFrontier::new();
/// frontier.push(0, 0, 9);
/// frontier.push(1, 0, 3);
/// assert_eq!(frontier.pop(), Some((1, 0, 3)));
/// assert_eq!(frontier.pop(), Some((0, 0, 9)));
/// assert_eq!(frontier.pop(), None);
/// ```
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl PriorityFrontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a candidate pixel with its intensity key.
    pub fn push(&mut self, x: u32, y: u32, intensity: u16) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            intensity,
            seq,
            x,
            y,
        }));
    }

    /// Pop the candidate with the smallest intensity.
    ///
    /// Among equal intensities the earliest-pushed candidate pops first.
    /// Returns `(x, y, intensity)`.
    pub fn pop(&mut self) -> Option<(u32, u32, u16)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.x, entry.y, entry.intensity))
    }

    /// Number of pending candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
