//! Axis-aligned n-dimensional extents.

use crate::coord::Coord;
use crate::error::GridError;
use crate::traits::IterationOrder;

/// An axis-aligned n-dimensional extent: per-axis minimum and size.
///
/// Pure value type with no backing storage. Immutable once created;
/// every size is validated to be non-negative at construction.
/// `max(d)` is inclusive (`min(d) + dimension(d) - 1`), matching the
/// half-open `[min, min + size)` coordinate range per axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    min: Coord,
    size: Coord,
}

impl Interval {
    /// Create an interval from per-axis minima and sizes.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if the vectors are
    /// empty or any size is negative, and
    /// `Err(GridError::DimensionMismatch)` if their lengths differ.
    pub fn new(min: &[i64], size: &[i64]) -> Result<Self, GridError> {
        if min.len() != size.len() {
            return Err(GridError::DimensionMismatch {
                expected: size.len(),
                actual: min.len(),
            });
        }
        if size.is_empty() {
            return Err(GridError::InvalidDimensions {
                reason: "interval must have at least one axis".into(),
            });
        }
        if let Some((d, &s)) = size.iter().enumerate().find(|(_, &s)| s < 0) {
            return Err(GridError::InvalidDimensions {
                reason: format!("size {s} on axis {d} is negative"),
            });
        }
        Ok(Self {
            min: Coord::from_slice(min),
            size: Coord::from_slice(size),
        })
    }

    /// Create a zero-minimum interval from per-axis sizes.
    pub fn from_size(size: &[i64]) -> Result<Self, GridError> {
        Self::new(&vec![0; size.len()], size)
    }

    /// Create an interval from inclusive per-axis minima and maxima.
    pub fn from_min_max(min: &[i64], max: &[i64]) -> Result<Self, GridError> {
        let size: Vec<i64> = min
            .iter()
            .zip(max)
            .map(|(&lo, &hi)| hi - lo + 1)
            .collect();
        Self::new(min, &size)
    }

    /// Number of axes.
    pub fn num_dimensions(&self) -> usize {
        self.size.len()
    }

    /// Inclusive minimum on axis `d`.
    pub fn min(&self, d: usize) -> i64 {
        self.min[d]
    }

    /// Inclusive maximum on axis `d`.
    pub fn max(&self, d: usize) -> i64 {
        self.min[d] + self.size[d] - 1
    }

    /// Extent on axis `d`.
    pub fn dimension(&self, d: usize) -> i64 {
        self.size[d]
    }

    /// Per-axis minima.
    pub fn mins(&self) -> &[i64] {
        &self.min
    }

    /// Per-axis extents.
    pub fn dimensions(&self) -> &[i64] {
        &self.size
    }

    /// Write the per-axis minima into `out`.
    pub fn min_into(&self, out: &mut [i64]) {
        out.copy_from_slice(&self.min);
    }

    /// Write the per-axis inclusive maxima into `out`.
    pub fn max_into(&self, out: &mut [i64]) {
        for d in 0..self.size.len() {
            out[d] = self.max(d);
        }
    }

    /// Total number of coordinates in the extent.
    ///
    /// Saturates at `u64::MAX` when the product of extents overflows,
    /// so callers comparing against a capacity cap see a too-large
    /// value rather than a wrapped-small one.
    pub fn num_elements(&self) -> u64 {
        self.size
            .iter()
            .map(|&s| s as u64)
            .fold(1u64, u64::saturating_mul)
    }

    /// Whether `position` lies inside the extent on every axis.
    ///
    /// A position of the wrong dimensionality is simply not contained.
    pub fn contains(&self, position: &[i64]) -> bool {
        position.len() == self.num_dimensions()
            && position
                .iter()
                .enumerate()
                .all(|(d, &p)| p >= self.min(d) && p <= self.max(d))
    }
}

impl IterationOrder for Interval {
    fn num_dimensions(&self) -> usize {
        self.size.len()
    }

    fn dimension(&self, d: usize) -> i64 {
        self.size[d]
    }
}
