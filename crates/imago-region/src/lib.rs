//! imago-region - Seeded region growing for raster processing
//!
//! This crate provides:
//!
//! - **Watershed region growing** - priority-ordered flood fill from seed
//!   points, bounded by a fill ceiling and an optional bit mask
//! - **Priority frontier** - deterministic min-ordered candidate queue
//! - **Local minima detection** - automatic seeding when no seeds are given
//! - **Region maps** - immutable label buffers with lazy region membership
//!
//! # Examples
//!
//! ## Watershed from explicit seeds
//!
//! ```
//! use imago_core::{Raster, RasterKind, BitDepth};
//! use imago_region::{SeedPoint, WatershedOptions, watershed};
//!
//! // Two basins separated by a ridge of 255s
//! let raster = Raster::from_samples(
//!     5,
//!     1,
//!     RasterKind::Grey,
//!     BitDepth::Bit8,
//!     vec![10, 20, 255, 20, 10],
//! )
//! .unwrap();
//!
//! let seeds = [SeedPoint::new(0, 0, 1), SeedPoint::new(4, 0, 2)];
//! let options = WatershedOptions::new().with_seeds(&seeds).with_fill_ceiling(100);
//! let map = watershed(&raster, &options).unwrap();
//!
//! assert_eq!(map.label_at(1, 0), Some(1));
//! assert_eq!(map.label_at(3, 0), Some(2));
//! assert_eq!(map.label_at(2, 0), Some(0)); // ridge stays background
//! ```
//!
//! ## Automatic seeding
//!
//! ```
//! use imago_core::{Raster, RasterKind, BitDepth};
//! use imago_region::{WatershedOptions, watershed};
//!
//! let raster = Raster::from_samples(
//!     3,
//!     1,
//!     RasterKind::Grey,
//!     BitDepth::Bit8,
//!     vec![1, 9, 2],
//! )
//! .unwrap();
//!
//! // No seeds given: the engine seeds from local minima
//! let map = watershed(&raster, &WatershedOptions::new()).unwrap();
//! assert_eq!(map.region_count(), 2);
//! ```

pub mod error;
pub mod extrema;
pub mod frontier;
pub mod region_map;
pub mod watershed;

// Re-export core types
pub use imago_core;

pub use error::{RegionError, RegionResult};
pub use extrema::{Connectivity, find_local_minima};
pub use frontier::PriorityFrontier;
pub use region_map::RegionMap;
pub use watershed::{SeedPoint, WatershedOptions, watershed};
