//! Sequential cursors over a store's full extent.
//!
//! Both cursors visit every coordinate in scan order — axis 0 fastest,
//! carrying into axis 1 on overflow. They differ in how they localize:
//! [`ArrayCursor`] tracks only its element index and recomputes
//! coordinates on demand, which keeps `fwd` to a single increment;
//! [`ArrayLocalizingCursor`] carries an explicit coordinate vector,
//! paying the carry propagation on every step so `localize` is free.
//!
//! A cursor starts uninitialized at index −1; the first `fwd` lands on
//! the first coordinate. `jump_fwd(k)` updates the index by `k` in one
//! step, never by `k` single steps.

use rastra_core::index;
use rastra_core::{Coord, Cursor, Localizable};

use crate::store::ArrayStore;

/// Lazily-localizing sequential cursor.
///
/// Created by [`ArrayStore::cursor`].
#[derive(Clone, Debug)]
pub struct ArrayCursor<'a, T> {
    store: &'a ArrayStore<T>,
    /// Element index in scan order; −1 before the first `fwd`.
    index: i64,
    /// Allocation steps with a unit entity multiplier, for
    /// localization in element units.
    loc_steps: Vec<i64>,
    last_index: i64,
}

impl<'a, T> ArrayCursor<'a, T> {
    pub(crate) fn new(store: &'a ArrayStore<T>) -> Self {
        Self {
            store,
            index: -1,
            loc_steps: index::allocation_steps(store.dimensions()),
            last_index: store.size() as i64 - 1,
        }
    }

    /// The element at the current coordinate (its first buffer slot
    /// when elements span several entities).
    #[inline]
    pub fn get(&self) -> &'a T {
        self.store
            .slot(self.index * self.store.entities_per_element() as i64)
    }

    /// Advance and return the newly-current element, or `None` when
    /// the scan is exhausted.
    pub fn next(&mut self) -> Option<&'a T> {
        if !self.has_next() {
            return None;
        }
        self.fwd();
        Some(self.get())
    }
}

impl<T> Localizable for ArrayCursor<'_, T> {
    fn num_dimensions(&self) -> usize {
        self.store.num_dimensions()
    }

    fn position(&self, d: usize) -> i64 {
        let mut pos = vec![0; self.store.num_dimensions()];
        self.localize(&mut pos);
        pos[d]
    }

    fn localize(&self, out: &mut [i64]) {
        index::position_for(self.index, self.store.dimensions(), &self.loc_steps, out);
    }
}

impl<T> Cursor for ArrayCursor<'_, T> {
    fn reset(&mut self) {
        self.index = -1;
    }

    #[inline]
    fn fwd(&mut self) {
        self.index += 1;
    }

    fn jump_fwd(&mut self, steps: u64) {
        // Clamp so step counts past the remaining extent land in the
        // exhausted state instead of wrapping the index negative.
        let remaining = u64::try_from(self.last_index - self.index).unwrap_or(0);
        if steps > remaining {
            self.index = self.last_index + 1;
        } else {
            self.index += steps as i64;
        }
    }

    fn has_next(&self) -> bool {
        self.index < self.last_index
    }
}

/// Sequential cursor with explicit coordinate tracking.
///
/// Created by [`ArrayStore::localizing_cursor`]. Prefer this over
/// [`ArrayCursor`] when the position is read on most visits.
#[derive(Clone, Debug)]
pub struct ArrayLocalizingCursor<'a, T> {
    store: &'a ArrayStore<T>,
    index: i64,
    pos: Coord,
    loc_steps: Vec<i64>,
    last_index: i64,
}

impl<'a, T> ArrayLocalizingCursor<'a, T> {
    pub(crate) fn new(store: &'a ArrayStore<T>) -> Self {
        let mut c = Self {
            store,
            index: -1,
            pos: Coord::from_elem(0, store.num_dimensions()),
            loc_steps: index::allocation_steps(store.dimensions()),
            last_index: store.size() as i64 - 1,
        };
        c.reset();
        c
    }

    /// The element at the current coordinate.
    #[inline]
    pub fn get(&self) -> &'a T {
        self.store
            .slot(self.index * self.store.entities_per_element() as i64)
    }

    /// Advance and return the newly-current element, or `None` when
    /// the scan is exhausted.
    pub fn next(&mut self) -> Option<&'a T> {
        if !self.has_next() {
            return None;
        }
        self.fwd();
        Some(self.get())
    }
}

impl<T> Localizable for ArrayLocalizingCursor<'_, T> {
    fn num_dimensions(&self) -> usize {
        self.store.num_dimensions()
    }

    fn position(&self, d: usize) -> i64 {
        self.pos[d]
    }
}

impl<T> Cursor for ArrayLocalizingCursor<'_, T> {
    fn reset(&mut self) {
        self.index = -1;
        // One step before the first coordinate in scan order.
        self.pos.iter_mut().for_each(|p| *p = 0);
        self.pos[0] = -1;
    }

    fn fwd(&mut self) {
        self.index += 1;
        for d in 0..self.pos.len() {
            self.pos[d] += 1;
            if self.pos[d] < self.store.dimension(d) {
                break;
            }
            self.pos[d] = 0;
        }
    }

    fn jump_fwd(&mut self, steps: u64) {
        // Single offset update; coordinates recovered once per jump.
        // Clamped like the lazy cursor so absurd step counts exhaust
        // rather than wrap.
        let remaining = u64::try_from(self.last_index - self.index).unwrap_or(0);
        self.index = if steps > remaining {
            self.last_index + 1
        } else {
            self.index + steps as i64
        };
        index::position_for(
            self.index,
            self.store.dimensions(),
            &self.loc_steps,
            &mut self.pos,
        );
    }

    fn has_next(&self) -> bool {
        self.index < self.last_index
    }
}
