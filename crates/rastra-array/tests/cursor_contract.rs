//! Cursor-contract compliance for the dense-store cursors.

use rastra_array::ArrayStore;
use rastra_test_utils as compliance;

#[test]
fn lazy_cursors_over_one_store_are_deterministic() {
    let s: ArrayStore<f32> = ArrayStore::new(&[5, 4, 3], 1).unwrap();
    let mut a = s.cursor();
    let mut b = s.cursor();
    compliance::assert_lockstep_determinism(&mut a, &mut b);
}

#[test]
fn localizing_cursor_agrees_with_lazy_cursor() {
    let s: ArrayStore<f32> = ArrayStore::new(&[5, 4, 3], 1).unwrap();
    let mut a = s.cursor();
    let mut b = s.localizing_cursor();
    compliance::assert_lockstep_determinism(&mut a, &mut b);
}

#[test]
fn full_scan_visits_the_extent_product_once() {
    let s: ArrayStore<u8> = ArrayStore::new(&[7, 3, 2], 1).unwrap();
    compliance::assert_visits_exactly(&mut s.cursor(), 42);
    compliance::assert_visits_exactly(&mut s.localizing_cursor(), 42);
}

#[test]
fn jump_fwd_matches_stepping_for_both_cursors() {
    let s: ArrayStore<u8> = ArrayStore::new(&[4, 3], 2).unwrap();
    compliance::assert_jump_fwd_matches_stepping(|| s.cursor(), 12);
    compliance::assert_jump_fwd_matches_stepping(|| s.localizing_cursor(), 12);
}

#[test]
fn reset_replays_the_scan() {
    let s: ArrayStore<u8> = ArrayStore::new(&[3, 3, 3], 1).unwrap();
    compliance::assert_reset_replays(&mut s.cursor());
    compliance::assert_reset_replays(&mut s.localizing_cursor());
}
