//! ROI-restricted iterable intervals over a dense store.

use rastra_array::ArrayStore;
use rastra_core::index;
use rastra_core::{Coord, Cursor, GridError, Interval, IterationOrder, Localizable, RealCoord};

use crate::region::RegionOfInterest;

/// Raster-scan state: the current member coordinate and the candidate
/// end of the run it belongs to.
///
/// Runs are transient — the scan holds only the current one and asks
/// the region for the next when it is exhausted. Cloning the state is
/// cheap, which is how cursors probe for a successor without
/// disturbing their position.
#[derive(Clone, Debug)]
struct RasterScan {
    pos: Coord,
    end: Coord,
    in_run: bool,
    done: bool,
}

impl RasterScan {
    fn new(n: usize) -> Self {
        // Lexicographically below every coordinate, so the first
        // next_raster call jumps to the region's first candidate.
        Self {
            pos: Coord::from_elem(i64::MIN, n),
            end: Coord::from_elem(i64::MIN, n),
            in_run: false,
            done: false,
        }
    }

    fn member_at(region: &dyn RegionOfInterest, pos: &[i64]) -> bool {
        let real: RealCoord = pos.iter().map(|&p| p as f64).collect();
        region.is_member(&real)
    }

    /// Advance to the next member coordinate. Returns `false` exactly
    /// once the scan is exhausted.
    fn advance(&mut self, region: &dyn RegionOfInterest) -> bool {
        if self.done {
            return false;
        }
        loop {
            if self.in_run {
                self.pos[0] += 1;
                // Still inside the candidate range and still a member:
                // the run continues. The re-check truncates candidate
                // runs that overshoot membership at concave borders.
                if self.pos[0] < self.end[0] && Self::member_at(region, &self.pos) {
                    return true;
                }
                // The scan resumes from the first non-member
                // coordinate, which keeps next_raster's precondition.
                self.in_run = false;
            }
            if !region.next_raster(&mut self.pos, &mut self.end) {
                self.done = true;
                return false;
            }
            if Self::member_at(region, &self.pos) {
                self.in_run = true;
                return true;
            }
        }
    }
}

/// An iterable interval restricted to a region's member coordinates
/// over a source [`ArrayStore`].
///
/// Binding performs one full raster scan to derive the tight bounding
/// box, the member count, and the first member coordinate; member
/// coordinates are never materialized as a list. Iteration order is
/// the raster order the scan discovers runs in: axis 0 fastest.
#[derive(Clone, Debug)]
pub struct RoiIterable<'a, T, R> {
    store: &'a ArrayStore<T>,
    region: R,
    bounds: Option<Interval>,
    size: u64,
    first: Option<Coord>,
}

impl<'a, T, R: RegionOfInterest> RoiIterable<'a, T, R> {
    /// Bind `region` to `store`.
    ///
    /// Fails with [`GridError::DimensionMismatch`] when the region and
    /// store disagree on dimensionality.
    pub fn new(region: R, store: &'a ArrayStore<T>) -> Result<Self, GridError> {
        let n = store.num_dimensions();
        if region.num_dimensions() != n {
            return Err(GridError::DimensionMismatch {
                expected: n,
                actual: region.num_dimensions(),
            });
        }

        let mut scan = RasterScan::new(n);
        let mut size = 0u64;
        let mut first: Option<Coord> = None;
        let mut lo = vec![i64::MAX; n];
        let mut hi = vec![i64::MIN; n];
        while scan.advance(&region) {
            size += 1;
            if first.is_none() {
                first = Some(scan.pos.clone());
            }
            for d in 0..n {
                lo[d] = lo[d].min(scan.pos[d]);
                hi[d] = hi[d].max(scan.pos[d]);
            }
        }
        let bounds = if size == 0 {
            None
        } else {
            Some(Interval::from_min_max(&lo, &hi)?)
        };

        Ok(Self {
            store,
            region,
            bounds,
            size,
            first,
        })
    }

    /// The bound region.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Number of axes.
    pub fn num_dimensions(&self) -> usize {
        self.store.num_dimensions()
    }

    /// Number of member coordinates.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether the region contains no member coordinates.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Tight bounding box of the member coordinates, derived from the
    /// scan's observed extrema. `None` for an empty region.
    pub fn bounds(&self) -> Option<&Interval> {
        self.bounds.as_ref()
    }

    /// Inclusive minimum of the bounding box on axis `d`.
    ///
    /// # Panics
    ///
    /// On an empty region; query [`bounds`](RoiIterable::bounds) when
    /// emptiness is possible.
    pub fn min(&self, d: usize) -> i64 {
        self.bounds.as_ref().expect("empty region has no bounds").min(d)
    }

    /// Inclusive maximum of the bounding box on axis `d`.
    ///
    /// # Panics
    ///
    /// On an empty region.
    pub fn max(&self, d: usize) -> i64 {
        self.bounds.as_ref().expect("empty region has no bounds").max(d)
    }

    /// Bounding-box extent on axis `d`; 0 for an empty region.
    pub fn dimension(&self, d: usize) -> i64 {
        self.bounds.as_ref().map_or(0, |b| b.dimension(d))
    }

    /// The element at the first discovered run's start, or `None` for
    /// an empty region.
    pub fn first_element(&self) -> Option<&'a T> {
        let first = self.first.as_ref()?;
        Some(self.store.slot(index::index_for(first, self.store.steps())))
    }

    /// A cursor over the member coordinates in raster order.
    pub fn cursor(&self) -> RoiCursor<'_, T, R> {
        RoiCursor {
            store: self.store,
            region: &self.region,
            scan: RasterScan::new(self.num_dimensions()),
        }
    }

    /// ROI cursors always track explicit coordinates, so the
    /// localizing cursor is the same implementation.
    pub fn localizing_cursor(&self) -> RoiCursor<'_, T, R> {
        self.cursor()
    }

    /// Whether `other` may be traversed in lockstep with this
    /// iterable: same dimensionality and bounding extents.
    pub fn equal_iteration_order(&self, other: &dyn IterationOrder) -> bool {
        rastra_core::traits::equal_iteration_order(self, other)
    }
}

impl<T, R: RegionOfInterest> IterationOrder for RoiIterable<'_, T, R> {
    fn num_dimensions(&self) -> usize {
        self.store.num_dimensions()
    }

    fn dimension(&self, d: usize) -> i64 {
        self.dimension(d)
    }
}

/// Cursor over a ROI's member coordinates.
///
/// Created by [`RoiIterable::cursor`]. Drives its own raster-scan
/// state and dereferences through the source store; any number of
/// cursors may scan one iterable independently.
#[derive(Clone, Debug)]
pub struct RoiCursor<'a, T, R> {
    store: &'a ArrayStore<T>,
    region: &'a R,
    scan: RasterScan,
}

impl<'a, T, R: RegionOfInterest> RoiCursor<'a, T, R> {
    /// The element at the current member coordinate.
    ///
    /// Undefined while uninitialized or exhausted, and the coordinate
    /// must lie inside the source store.
    pub fn get(&self) -> &'a T {
        self.store
            .slot(index::index_for(&self.scan.pos, self.store.steps()))
    }

    /// Advance and return the newly-current element, or `None` once
    /// the scan is exhausted.
    pub fn next(&mut self) -> Option<&'a T> {
        if self.scan.advance(self.region) {
            Some(self.get())
        } else {
            None
        }
    }
}

impl<T, R: RegionOfInterest> Localizable for RoiCursor<'_, T, R> {
    fn num_dimensions(&self) -> usize {
        self.scan.pos.len()
    }

    fn position(&self, d: usize) -> i64 {
        self.scan.pos[d]
    }
}

impl<T, R: RegionOfInterest> Cursor for RoiCursor<'_, T, R> {
    fn reset(&mut self) {
        self.scan = RasterScan::new(self.scan.pos.len());
    }

    fn fwd(&mut self) {
        self.scan.advance(self.region);
    }

    fn jump_fwd(&mut self, steps: u64) {
        // Runs are predicate-defined; there is no closed form for a
        // bulk skip, so a jump is that many successor steps.
        for _ in 0..steps {
            if !self.scan.advance(self.region) {
                break;
            }
        }
    }

    fn has_next(&self) -> bool {
        if self.scan.done {
            return false;
        }
        // Probe a clone of the scan state so the current position is
        // untouched.
        let mut probe = self.scan.clone();
        probe.advance(self.region)
    }
}
