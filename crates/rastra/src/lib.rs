//! Rastra: dense n-dimensional array storage with positional access.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Rastra sub-crates. For most users, adding `rastra` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rastra::prelude::*;
//!
//! // A 12x15 image, one slot per element.
//! let mut img: ArrayStore<f64> = ArrayStore::new(&[12, 15], 1).unwrap();
//!
//! // Write through the exclusive random access.
//! let mut a = img.random_access_mut();
//! a.set_position(&[5, 6]).unwrap();
//! a.set(1.0);
//!
//! // Iterate a rectangular region of interest.
//! let roi = RectangleRegion::new(Interval::new(&[5, 6], &[4, 7]).unwrap());
//! let ii = RoiIterable::new(roi, &img).unwrap();
//! assert_eq!(ii.size(), 28);
//! assert_eq!(ii.first_element(), Some(&1.0));
//!
//! // Read past the image border through a periodic extension.
//! let mut ext = img.extended_random_access(OutOfBounds::Periodic);
//! ext.set_position(&[-7, 6]).unwrap();
//! assert_eq!(*ext.get(), 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use rastra_array as array;
pub use rastra_core as core;
pub use rastra_roi as roi;

/// Single-import convenience: the types most code touches.
pub mod prelude {
    pub use rastra_array::{
        ArrayCursor, ArrayLocalizingCursor, ArrayStore, ExtendedRandomAccess, OutOfBounds,
        RandomAccess, RandomAccessMut,
    };
    pub use rastra_core::{
        Coord, Cursor, GridError, Interval, IterationOrder, Localizable, RealCoord,
    };
    pub use rastra_roi::{
        PeriodicLine, PeriodicLineCursor, RectangleRegion, RegionOfInterest, RoiCursor,
        RoiIterable,
    };
}
