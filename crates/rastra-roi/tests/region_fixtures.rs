//! End-to-end fixtures for ROI iteration over a dense store.

use rand::RngExt;
use rastra_array::ArrayStore;
use rastra_core::{Cursor, Interval, Localizable};
use rastra_roi::{RectangleRegion, RegionOfInterest, RoiIterable};
use rastra_test_utils as compliance;

/// A (12, 15) store filled with random values, with the (5, 6, 4, 7)
/// rectangle bound over it.
fn fixture() -> (ArrayStore<f64>, RectangleRegion) {
    let mut store: ArrayStore<f64> = ArrayStore::new(&[12, 15], 1).unwrap();
    let mut rng = rand::rng();
    let mut a = store.random_access_mut();
    for y in 0..15 {
        for x in 0..12 {
            a.set_position(&[x, y]).unwrap();
            a.set(rng.random::<f64>());
        }
    }
    let region = RectangleRegion::new(Interval::new(&[5, 6], &[4, 7]).unwrap());
    (store, region)
}

#[test]
fn limits_and_size_of_the_rectangle_fixture() {
    let (store, region) = fixture();
    let ii = RoiIterable::new(region, &store).unwrap();
    assert_eq!(ii.num_dimensions(), 2);
    assert_eq!(ii.min(0), 5);
    assert_eq!(ii.max(0), 8);
    assert_eq!(ii.min(1), 6);
    assert_eq!(ii.max(1), 12);
    assert_eq!(ii.dimension(0), 4);
    assert_eq!(ii.dimension(1), 7);
    assert_eq!(ii.size(), 28);
}

#[test]
fn first_element_is_the_store_element_at_the_region_start() {
    let (store, region) = fixture();
    let ii = RoiIterable::new(region, &store).unwrap();
    let mut a = store.random_access();
    a.set_position(&[5, 6]).unwrap();
    assert_eq!(ii.first_element(), Some(a.get()));
}

#[test]
fn cursor_visits_the_28_member_coordinates_in_scan_order() {
    let (store, region) = fixture();
    let ii = RoiIterable::new(region, &store).unwrap();
    let mut c = ii.cursor();
    let mut a = store.random_access();
    for y in 6..13 {
        for x in 5..9 {
            assert!(c.has_next());
            c.fwd();
            assert_eq!(c.position(0), x);
            assert_eq!(c.position(1), y);
            a.set_position(&[x, y]).unwrap();
            assert_eq!(c.get(), a.get());
        }
    }
    assert!(!c.has_next());
}

#[test]
fn next_yields_the_same_elements_as_fwd_plus_get() {
    let (store, region) = fixture();
    let ii = RoiIterable::new(region, &store).unwrap();
    let mut by_fwd = ii.cursor();
    let mut by_next = ii.cursor();
    loop {
        match by_next.next() {
            Some(v) => {
                assert!(by_fwd.has_next());
                by_fwd.fwd();
                assert_eq!(v, by_fwd.get());
            }
            None => {
                assert!(!by_fwd.has_next());
                break;
            }
        }
    }
}

#[test]
fn roi_cursor_satisfies_the_cursor_contract() {
    let (store, region) = fixture();
    let ii = RoiIterable::new(region, &store).unwrap();
    compliance::assert_visits_exactly(&mut ii.cursor(), 28);
    compliance::assert_reset_replays(&mut ii.cursor());
    let mut a = ii.cursor();
    let mut b = ii.localizing_cursor();
    compliance::assert_lockstep_determinism(&mut a, &mut b);
    compliance::assert_jump_fwd_matches_stepping(|| ii.cursor(), 28);
}

#[test]
fn random_jumps_land_where_stepping_lands() {
    let (store, region) = fixture();
    let ii = RoiIterable::new(region, &store).unwrap();
    let mut rng = rand::rng();
    let mut a = store.random_access();
    for _ in 0..100 {
        let mut c = ii.cursor();
        let x1 = rng.random_range(5..9i64);
        let y1 = rng.random_range(6..13i64);
        let x2 = rng.random_range(x1..9i64);
        let y2 = rng.random_range(y1..13i64);

        c.jump_fwd(((x1 - 5) + (y1 - 6) * 4 + 1) as u64);
        assert_eq!(c.position(0), x1);
        assert_eq!(c.position(1), y1);
        a.set_position(&[x1, y1]).unwrap();
        assert_eq!(a.get(), c.get());

        c.jump_fwd(((x2 - x1) + (y2 - y1) * 4) as u64);
        assert_eq!(c.position(0), x2);
        assert_eq!(c.position(1), y2);
        a.set_position(&[x2, y2]).unwrap();
        assert_eq!(a.get(), c.get());
    }
}

#[test]
fn equal_iteration_order_depends_only_on_extents() {
    let store_f64: ArrayStore<f64> = ArrayStore::new(&[15, 13], 1).unwrap();
    let store_i32: ArrayStore<i32> = ArrayStore::new(&[15, 13], 1).unwrap();

    let at_origin = RectangleRegion::new(Interval::new(&[0, 0], &[3, 5]).unwrap());
    let offset = RectangleRegion::new(Interval::new(&[1, 3], &[3, 5]).unwrap());
    let other_extent = RectangleRegion::new(Interval::new(&[0, 0], &[5, 3]).unwrap());

    let ii_f64 = RoiIterable::new(at_origin.clone(), &store_f64).unwrap();
    let ii_i32 = RoiIterable::new(at_origin, &store_i32).unwrap();
    let ii_offset = RoiIterable::new(offset, &store_f64).unwrap();
    let ii_other = RoiIterable::new(other_extent, &store_f64).unwrap();

    assert!(ii_i32.equal_iteration_order(&ii_f64));
    assert!(ii_f64.equal_iteration_order(&ii_i32));
    assert!(ii_i32.equal_iteration_order(&ii_offset));
    assert!(!ii_i32.equal_iteration_order(&ii_other));
}

/// An L-shaped union of two rectangles sharing their left edge.
///
/// `next_raster` reports each covered row starting at the left edge
/// with the bounding box's right edge as the candidate end, so rows in
/// the narrow arm overshoot membership and rely on the scan's
/// re-validation to truncate the run.
struct LShape {
    wide: Interval,
    tall: Interval,
    bounds: Interval,
}

impl LShape {
    fn new() -> Self {
        Self {
            // Rows 0..2: x in 0..6. Rows 2..6: x in 0..2.
            wide: Interval::new(&[0, 0], &[6, 2]).unwrap(),
            tall: Interval::new(&[0, 2], &[2, 4]).unwrap(),
            bounds: Interval::new(&[0, 0], &[6, 6]).unwrap(),
        }
    }
}

impl RegionOfInterest for LShape {
    fn num_dimensions(&self) -> usize {
        2
    }

    fn is_member(&self, position: &[f64]) -> bool {
        let inside = |iv: &Interval| {
            (0..2).all(|d| {
                position[d] >= iv.min(d) as f64
                    && position[d] < (iv.min(d) + iv.dimension(d)) as f64
            })
        };
        inside(&self.wide) || inside(&self.tall)
    }

    fn next_raster(&self, position: &mut [i64], end: &mut [i64]) -> bool {
        // Bounding-box raster: every covered row starts at x = 0, and
        // the candidate end deliberately overshoots on the tall arm.
        RectangleRegion::new(self.bounds.clone()).next_raster(position, end)
    }
}

#[test]
fn concave_candidate_runs_are_truncated_by_membership() {
    let store: ArrayStore<f64> = ArrayStore::new(&[8, 8], 1).unwrap();
    let ii = RoiIterable::new(LShape::new(), &store).unwrap();

    // 2 wide rows of 6 plus 4 narrow rows of 2.
    assert_eq!(ii.size(), 2 * 6 + 4 * 2);
    assert_eq!(ii.min(0), 0);
    assert_eq!(ii.max(0), 5);
    assert_eq!(ii.min(1), 0);
    assert_eq!(ii.max(1), 5);

    let mut c = ii.cursor();
    let mut visited = Vec::new();
    while c.has_next() {
        c.fwd();
        visited.push((c.position(0), c.position(1)));
    }
    let mut expected = Vec::new();
    for y in 0..2 {
        for x in 0..6 {
            expected.push((x, y));
        }
    }
    for y in 2..6 {
        for x in 0..2 {
            expected.push((x, y));
        }
    }
    assert_eq!(visited, expected);
}
