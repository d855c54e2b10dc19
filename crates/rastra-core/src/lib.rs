//! Core types and traits for the Rastra n-dimensional image access engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate representation, the [`Interval`] extent type, the
//! linear indexer, error types, and the accessor trait contracts that
//! the storage and region crates build on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod index;
pub mod interval;
pub mod traits;

pub use coord::{Coord, RealCoord};
pub use error::GridError;
pub use interval::Interval;
pub use traits::{Cursor, IterationOrder, Localizable};
