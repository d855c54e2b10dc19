//! Out-of-bounds strategies and the extended random access.
//!
//! An [`ExtendedRandomAccess`] may be positioned anywhere; queries at
//! coordinates outside the store's interval are never errors but are
//! resolved by the [`OutOfBounds`] strategy bound at construction.
//! The strategy set is closed; switching strategy means constructing a
//! new bound access.

use rastra_core::index;
use rastra_core::{Coord, GridError, Localizable};

use crate::random_access::{positioning_api, Position};
use crate::store::ArrayStore;

/// How an out-of-bounds query is resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum OutOfBounds<T> {
    /// Produce a fixed sentinel value. The underlying position keeps
    /// tracking the query coordinate and is never clamped.
    Constant(T),
    /// Redirect to the nearest in-bounds coordinate, per axis
    /// independently.
    Clamp,
    /// Redirect by wrapping each axis into `[min, min + size)`. True
    /// modulo: querying `-1` on an axis of size `N` resolves to
    /// `N - 1`, querying `N` resolves to `0`.
    Periodic,
}

/// A random access bound to an [`OutOfBounds`] strategy.
///
/// Created by [`ArrayStore::extended_random_access`]. Positioning is
/// unbounded; only [`get`](ExtendedRandomAccess::get) consults the
/// strategy, and once the position re-enters the interval, addressing
/// reverts to the direct slot with no residual state.
#[derive(Clone, Debug)]
pub struct ExtendedRandomAccess<'a, T> {
    store: &'a ArrayStore<T>,
    position: Position,
    strategy: OutOfBounds<T>,
}

impl<'a, T> ExtendedRandomAccess<'a, T> {
    pub(crate) fn new(store: &'a ArrayStore<T>, strategy: OutOfBounds<T>) -> Self {
        Self {
            store,
            position: Position::at_origin(store.steps()),
            strategy,
        }
    }

    positioning_api!();

    /// Whether the current position lies outside the store's interval.
    pub fn is_out_of_bounds(&self) -> bool {
        !self
            .store
            .interval()
            .contains(&self.position.pos)
    }

    /// Linear offset of the in-bounds coordinate the current position
    /// redirects to under the bound strategy.
    fn redirected_offset(&self) -> i64 {
        let interval = self.store.interval();
        let mut mapped = Coord::from_elem(0, self.num_dimensions());
        for d in 0..self.num_dimensions() {
            let p = self.position.pos[d];
            mapped[d] = match self.strategy {
                OutOfBounds::Clamp => p.clamp(interval.min(d), interval.max(d)),
                OutOfBounds::Periodic => {
                    interval.min(d) + (p - interval.min(d)).rem_euclid(interval.dimension(d))
                }
                OutOfBounds::Constant(_) => unreachable!("constant strategy never redirects"),
            };
        }
        index::index_for(&mapped, self.store.steps())
    }

    /// The slot the current position resolves to.
    ///
    /// In bounds this is the direct slot; out of bounds the strategy
    /// decides: a reference to the sentinel for
    /// [`OutOfBounds::Constant`], the redirected slot otherwise.
    pub fn get(&self) -> &T {
        if !self.is_out_of_bounds() {
            return self.store.slot(self.position.offset);
        }
        match &self.strategy {
            OutOfBounds::Constant(value) => value,
            OutOfBounds::Clamp | OutOfBounds::Periodic => {
                self.store.slot(self.redirected_offset())
            }
        }
    }
}

impl<T> Localizable for ExtendedRandomAccess<'_, T> {
    fn num_dimensions(&self) -> usize {
        self.store.num_dimensions()
    }

    fn position(&self, d: usize) -> i64 {
        self.position.pos[d]
    }

    fn real_position(&self, d: usize) -> f64 {
        self.position.real[d]
    }
}
