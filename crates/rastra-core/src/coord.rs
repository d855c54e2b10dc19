//! Coordinate type aliases.

use smallvec::SmallVec;

/// An n-dimensional grid coordinate.
///
/// Inline storage covers up to 4 axes without heap allocation, which is
/// every common image dimensionality (x, y, z, time/channel). Axis
/// values are `i64`: extents in this domain are long-valued and region
/// scans position themselves outside a store's bounds on purpose.
pub type Coord = SmallVec<[i64; 4]>;

/// An n-dimensional real-valued coordinate.
///
/// Used as the floating shadow of a grid position so that fractional
/// moves accumulate instead of being truncated at each step.
pub type RealCoord = SmallVec<[f64; 4]>;
