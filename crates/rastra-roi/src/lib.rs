//! Region-of-interest iteration for the Rastra image access engine.
//!
//! A [`RegionOfInterest`] is a membership predicate over real
//! coordinates plus a raster-scan contract that discovers candidate
//! runs of member coordinates along axis 0. [`RoiIterable`] binds a
//! region to a source [`ArrayStore`](rastra_array::ArrayStore) and
//! exposes cursors, the tight bounding box, and the member count
//! without ever materializing the member coordinate list.
//!
//! [`PeriodicLine`] provides the line-shaped local neighborhood built
//! on the same positional access layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod iterable;
pub mod neighborhood;
pub mod region;

pub use iterable::{RoiCursor, RoiIterable};
pub use neighborhood::{PeriodicLine, PeriodicLineCursor};
pub use region::{RectangleRegion, RegionOfInterest};
