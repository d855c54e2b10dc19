//! The region-of-interest contract and the rectangle reference region.

use std::cmp::Ordering;

use rastra_core::Interval;

/// A region of interest: a membership predicate over real coordinates
/// plus a raster-scan contract for discovering candidate runs of
/// member coordinates.
///
/// Implementations are stateless between queries; all scan state lives
/// in the caller.
pub trait RegionOfInterest {
    /// Number of axes.
    fn num_dimensions(&self) -> usize;

    /// Whether a real-valued coordinate belongs to the region.
    fn is_member(&self, position: &[f64]) -> bool;

    /// Advance `position` to the start of the next candidate run along
    /// axis 0 and set `end[0]` to a candidate upper bound for it.
    ///
    /// Must be called with a non-member `position`. Returns `false`
    /// when no further runs exist, terminating the scan. On `true`,
    /// `position` is a true member and the half-open range
    /// `[position[0], end[0])` on `position`'s row does not exceed the
    /// region's bounding row — it may still overshoot true membership
    /// near concave boundaries, so callers re-check
    /// [`is_member`](RegionOfInterest::is_member) inside the candidate
    /// range and treat the first failure as the end of the run.
    ///
    /// `end[d]` for `d > 0` mirrors `position[d]`.
    fn next_raster(&self, position: &mut [i64], end: &mut [i64]) -> bool;
}

/// Compare two coordinates lexicographically with the slowest axis
/// (highest index) most significant, over axes `lo..`.
fn cmp_slow_first(a: &[i64], b: impl Fn(usize) -> i64, lo: usize) -> Ordering {
    for d in (lo..a.len()).rev() {
        match a[d].cmp(&b(d)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// An axis-aligned rectangular region over an [`Interval`].
///
/// Membership is half-open per axis: `min(d) <= p < min(d) + size(d)`.
/// The reference implementation of the raster-scan contract; every
/// branch of [`next_raster`](RegionOfInterest::next_raster) below
/// matches the region-boundary semantics the scan engine is specified
/// against.
#[derive(Clone, Debug)]
pub struct RectangleRegion {
    interval: Interval,
}

impl RectangleRegion {
    /// Create the rectangle covering `interval`.
    pub fn new(interval: Interval) -> Self {
        Self { interval }
    }

    /// The covered extent.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

impl RegionOfInterest for RectangleRegion {
    fn num_dimensions(&self) -> usize {
        self.interval.num_dimensions()
    }

    fn is_member(&self, position: &[f64]) -> bool {
        position.len() == self.num_dimensions()
            && (0..position.len()).all(|d| {
                let p = position[d];
                p >= self.interval.min(d) as f64
                    && p < (self.interval.min(d) + self.interval.dimension(d)) as f64
            })
    }

    fn next_raster(&self, position: &mut [i64], end: &mut [i64]) -> bool {
        let n = self.num_dimensions();
        let iv = &self.interval;

        if cmp_slow_first(position, |d| iv.min(d), 0) == Ordering::Less {
            // Below the region's first candidate: jump to it.
            for d in 0..n {
                position[d] = iv.min(d);
            }
        } else {
            // Where the row axes (everything above axis 0) sit relative
            // to the region's last row.
            let rows = cmp_slow_first(position, |d| iv.max(d), 1);
            if rows == Ordering::Greater {
                // Past the last row.
                return false;
            }
            if rows == Ordering::Equal && position[0] > iv.max(0) {
                // On the last row, past its horizontal extent.
                return false;
            }
            if position[0] < iv.min(0) {
                // Left of the region on a covered row: snap right.
                position[0] = iv.min(0);
            } else {
                // Mid- or end-of-row: advance to the next row's left
                // edge, carrying into slower axes as rows overflow.
                // Running out of rows terminates the scan; reachable
                // when a non-member coordinate sits inside the last
                // row's horizontal extent (concave callers).
                position[0] = iv.min(0);
                let mut d = 1;
                loop {
                    if d == n {
                        return false;
                    }
                    position[d] += 1;
                    if position[d] <= iv.max(d) {
                        break;
                    }
                    position[d] = iv.min(d);
                    d += 1;
                }
            }
        }

        end.copy_from_slice(position);
        end[0] = iv.max(0) + 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(min: [i64; 2], size: [i64; 2]) -> RectangleRegion {
        RectangleRegion::new(Interval::new(&min, &size).unwrap())
    }

    #[test]
    fn membership_is_half_open() {
        let r = rect([5, 6], [4, 7]);
        assert!(r.is_member(&[5.0, 6.0]));
        assert!(r.is_member(&[8.9, 12.9]));
        assert!(!r.is_member(&[9.0, 6.0]));
        assert!(!r.is_member(&[5.0, 13.0]));
        assert!(!r.is_member(&[4.9, 6.0]));
        assert!(!r.is_member(&[5.0]));
    }

    #[test]
    fn below_start_jumps_to_the_first_candidate() {
        let r = rect([5, 6], [4, 7]);
        let mut pos = [i64::MIN, i64::MIN];
        let mut end = [0, 0];
        assert!(r.next_raster(&mut pos, &mut end));
        assert_eq!(pos, [5, 6]);
        assert_eq!(end, [9, 6]);
    }

    #[test]
    fn start_of_row_snaps_left() {
        let r = rect([5, 6], [4, 7]);
        let mut pos = [2, 8];
        let mut end = [0, 0];
        assert!(r.next_raster(&mut pos, &mut end));
        assert_eq!(pos, [5, 8]);
        assert_eq!(end, [9, 8]);
    }

    #[test]
    fn end_of_row_advances_to_the_next_row() {
        let r = rect([5, 6], [4, 7]);
        let mut pos = [9, 8];
        let mut end = [0, 0];
        assert!(r.next_raster(&mut pos, &mut end));
        assert_eq!(pos, [5, 9]);
        assert_eq!(end, [9, 9]);
    }

    #[test]
    fn past_the_last_row_terminates() {
        let r = rect([5, 6], [4, 7]);
        let mut pos = [5, 13];
        let mut end = [0, 0];
        assert!(!r.next_raster(&mut pos, &mut end));
    }

    #[test]
    fn last_row_past_its_extent_terminates() {
        let r = rect([5, 6], [4, 7]);
        let mut pos = [9, 12];
        let mut end = [0, 0];
        assert!(!r.next_raster(&mut pos, &mut end));
    }

    #[test]
    fn three_dimensional_rows_carry_into_slower_axes() {
        let r = RectangleRegion::new(Interval::new(&[0, 0, 0], &[2, 2, 2]).unwrap());
        // End of the last row of the first plane.
        let mut pos = [2, 1, 0];
        let mut end = [0, 0, 0];
        assert!(r.next_raster(&mut pos, &mut end));
        assert_eq!(pos, [0, 0, 1]);
        assert_eq!(end, [2, 0, 1]);

        // End of the very last row.
        let mut pos = [2, 1, 1];
        assert!(!r.next_raster(&mut pos, &mut end));
    }
}
