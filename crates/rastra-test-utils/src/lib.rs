//! Test utilities for Rastra development.
//!
//! Cursor-contract helpers reused across the storage and region crate
//! test suites. Each function asserts one invariant of the [`Cursor`]
//! contract; backend test modules call them against their concrete
//! cursor types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexSet;
use rastra_core::Cursor;

/// Collect every coordinate a cursor visits, from its current state to
/// exhaustion.
pub fn collect_positions(cursor: &mut dyn Cursor) -> Vec<Vec<i64>> {
    let n = cursor.num_dimensions();
    let mut out = Vec::new();
    while cursor.has_next() {
        cursor.fwd();
        let mut pos = vec![0; n];
        cursor.localize(&mut pos);
        out.push(pos);
    }
    out
}

/// Assert that two cursors stepped in lockstep visit identical
/// coordinate sequences.
pub fn assert_lockstep_determinism(a: &mut dyn Cursor, b: &mut dyn Cursor) {
    let pa = collect_positions(a);
    let pb = collect_positions(b);
    assert_eq!(pa, pb, "cursors over one interval diverged");
}

/// Assert that a cursor takes exactly `expected` forward steps before
/// exhaustion and never revisits a coordinate.
pub fn assert_visits_exactly(cursor: &mut dyn Cursor, expected: u64) {
    let positions = collect_positions(cursor);
    assert_eq!(
        positions.len() as u64,
        expected,
        "wrong number of steps before exhaustion"
    );
    let unique: IndexSet<Vec<i64>> = positions.iter().cloned().collect();
    assert_eq!(
        unique.len(),
        positions.len(),
        "cursor revisited a coordinate"
    );
}

/// Assert that `jump_fwd` composed with intervening `fwd` calls lands
/// on the exact coordinate continuous stepping reaches.
///
/// `make` must return a fresh cursor over the same interval on every
/// call; `total` is the number of coordinates the interval holds.
pub fn assert_jump_fwd_matches_stepping<C: Cursor>(make: impl Fn() -> C, total: u64) {
    for split in 0..total {
        let mut jumped = make();
        jumped.jump_fwd(split);
        jumped.fwd();
        jumped.jump_fwd(total - split - 1);

        let mut stepped = make();
        for _ in 0..total {
            stepped.fwd();
        }

        let n = stepped.num_dimensions();
        let mut a = vec![0; n];
        let mut b = vec![0; n];
        jumped.localize(&mut a);
        stepped.localize(&mut b);
        assert_eq!(a, b, "jump_fwd split at {split} diverged from stepping");
        assert!(!jumped.has_next());
    }
}

/// Assert that `reset` returns a cursor to the uninitialized state:
/// the replayed coordinate sequence is identical.
pub fn assert_reset_replays(cursor: &mut dyn Cursor) {
    let first = collect_positions(cursor);
    cursor.reset();
    let second = collect_positions(cursor);
    assert_eq!(first, second, "reset did not replay the same sequence");
}
