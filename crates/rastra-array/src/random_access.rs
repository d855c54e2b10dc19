//! Random (absolute/relative) positional accessors.
//!
//! Position state is one grid coordinate vector, its floating shadow,
//! and a cached linear offset kept consistent with the coordinates
//! under the store's allocation steps. Every repositioning operation
//! updates all three together.
//!
//! The read accessor borrows the store shared, so any number may
//! coexist; [`RandomAccessMut`] borrows it exclusively and is the only
//! writer.

use rastra_core::index;
use rastra_core::{Coord, GridError, Localizable, RealCoord};
use smallvec::SmallVec;

use crate::store::ArrayStore;

/// Position state shared by every random-access flavor.
///
/// `real` is the floating shadow of `pos`: fractional moves accumulate
/// there instead of being dropped at each step, and `pos` is always
/// the truncation of `real` toward zero. For purely integer
/// repositioning the two agree exactly.
#[derive(Clone, Debug)]
pub(crate) struct Position {
    pub(crate) pos: Coord,
    pub(crate) real: RealCoord,
    pub(crate) offset: i64,
    steps: SmallVec<[i64; 4]>,
}

impl Position {
    pub(crate) fn at_origin(steps: &[i64]) -> Self {
        let n = steps.len();
        Self {
            pos: Coord::from_elem(0, n),
            real: RealCoord::from_elem(0.0, n),
            offset: 0,
            steps: SmallVec::from_slice(steps),
        }
    }

    fn check_len(&self, actual: usize) -> Result<(), GridError> {
        if actual != self.pos.len() {
            return Err(GridError::DimensionMismatch {
                expected: self.pos.len(),
                actual,
            });
        }
        Ok(())
    }

    pub(crate) fn set_position(&mut self, position: &[i64]) -> Result<(), GridError> {
        self.check_len(position.len())?;
        self.pos.copy_from_slice(position);
        for d in 0..position.len() {
            self.real[d] = position[d] as f64;
        }
        self.offset = index::index_for(position, &self.steps);
        Ok(())
    }

    pub(crate) fn set_position_real(&mut self, position: &[f64]) -> Result<(), GridError> {
        self.check_len(position.len())?;
        for d in 0..position.len() {
            self.real[d] = position[d];
            self.pos[d] = position[d] as i64;
        }
        self.offset = index::index_for(&self.pos, &self.steps);
        Ok(())
    }

    pub(crate) fn move_by(&mut self, delta: &[i64]) -> Result<(), GridError> {
        self.check_len(delta.len())?;
        for d in 0..delta.len() {
            self.pos[d] += delta[d];
            self.real[d] += delta[d] as f64;
            self.offset += delta[d] * self.steps[d];
        }
        Ok(())
    }

    pub(crate) fn move_real(&mut self, delta: &[f64]) -> Result<(), GridError> {
        self.check_len(delta.len())?;
        for d in 0..delta.len() {
            self.move_axis_real(delta[d], d);
        }
        Ok(())
    }

    pub(crate) fn set_axis(&mut self, position: i64, d: usize) {
        self.offset += (position - self.pos[d]) * self.steps[d];
        self.pos[d] = position;
        self.real[d] = position as f64;
    }

    pub(crate) fn move_axis(&mut self, delta: i64, d: usize) {
        self.pos[d] += delta;
        self.real[d] += delta as f64;
        self.offset += delta * self.steps[d];
    }

    pub(crate) fn set_axis_real(&mut self, position: f64, d: usize) {
        self.real[d] = position;
        let grid = position as i64;
        self.offset += (grid - self.pos[d]) * self.steps[d];
        self.pos[d] = grid;
    }

    pub(crate) fn move_axis_real(&mut self, delta: f64, d: usize) {
        // Accumulate in the shadow; the grid position and offset follow
        // only by the whole-slot part of the accumulated value.
        self.real[d] += delta;
        let grid = self.real[d] as i64;
        self.offset += (grid - self.pos[d]) * self.steps[d];
        self.pos[d] = grid;
    }

    pub(crate) fn set_position_from(&mut self, source: &dyn Localizable) -> Result<(), GridError> {
        self.check_len(source.num_dimensions())?;
        let mut real = RealCoord::from_elem(0.0, self.real.len());
        source.localize_real(&mut real);
        self.set_position_real(&real)
    }
}

macro_rules! positioning_api {
    () => {
        /// Absolute repositioning from a grid coordinate.
        pub fn set_position(&mut self, position: &[i64]) -> Result<(), GridError> {
            self.position.set_position(position)
        }

        /// Absolute repositioning from a real-valued coordinate; the
        /// grid position is the truncation toward zero per axis.
        pub fn set_position_real(&mut self, position: &[f64]) -> Result<(), GridError> {
            self.position.set_position_real(position)
        }

        /// Absolute repositioning from any positioned object.
        pub fn set_position_from(&mut self, source: &dyn Localizable) -> Result<(), GridError> {
            self.position.set_position_from(source)
        }

        /// Relative move by a grid delta. The offset is updated
        /// incrementally, never recomputed from scratch.
        pub fn move_by(&mut self, delta: &[i64]) -> Result<(), GridError> {
            self.position.move_by(delta)
        }

        /// Relative move by a real-valued delta. Fractional parts
        /// accumulate in the floating shadow rather than being dropped
        /// at each step.
        pub fn move_real(&mut self, delta: &[f64]) -> Result<(), GridError> {
            self.position.move_real(delta)
        }

        /// Set the position on a single axis.
        pub fn set_axis(&mut self, position: i64, d: usize) {
            self.position.set_axis(position, d)
        }

        /// Move along a single axis.
        pub fn move_axis(&mut self, delta: i64, d: usize) {
            self.position.move_axis(delta, d)
        }

        /// Set the real-valued position on a single axis.
        pub fn set_axis_real(&mut self, position: f64, d: usize) {
            self.position.set_axis_real(position, d)
        }

        /// Move along a single axis by a real-valued delta.
        pub fn move_axis_real(&mut self, delta: f64, d: usize) {
            self.position.move_axis_real(delta, d)
        }

        /// The cached linear entity offset of the current position.
        pub fn offset(&self) -> i64 {
            self.position.offset
        }
    };
}

pub(crate) use positioning_api;

/// A read-only random access over an [`ArrayStore`].
///
/// Created by [`ArrayStore::random_access`]. Holds independent
/// position state; cheap to clone for probing.
#[derive(Debug)]
pub struct RandomAccess<'a, T> {
    store: &'a ArrayStore<T>,
    position: Position,
}

impl<T> Clone for RandomAccess<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            position: self.position.clone(),
        }
    }
}

impl<'a, T> RandomAccess<'a, T> {
    pub(crate) fn new(store: &'a ArrayStore<T>) -> Self {
        Self {
            store,
            position: Position::at_origin(store.steps()),
        }
    }

    positioning_api!();

    /// The slot at the current position.
    ///
    /// The position must be inside the store's interval; use
    /// [`ExtendedRandomAccess`](crate::ExtendedRandomAccess) when it
    /// may not be.
    #[inline]
    pub fn get(&self) -> &'a T {
        self.store.slot(self.position.offset)
    }
}

impl<T> Localizable for RandomAccess<'_, T> {
    fn num_dimensions(&self) -> usize {
        self.position.pos.len()
    }

    fn position(&self, d: usize) -> i64 {
        self.position.pos[d]
    }

    fn real_position(&self, d: usize) -> f64 {
        self.position.real[d]
    }
}

/// The writing random access: exclusive borrow of the store.
#[derive(Debug)]
pub struct RandomAccessMut<'a, T> {
    store: &'a mut ArrayStore<T>,
    position: Position,
}

impl<'a, T> RandomAccessMut<'a, T> {
    pub(crate) fn new(store: &'a mut ArrayStore<T>) -> Self {
        let position = Position::at_origin(store.steps());
        Self { store, position }
    }

    positioning_api!();

    /// The slot at the current position.
    #[inline]
    pub fn get(&self) -> &T {
        self.store.slot(self.position.offset)
    }

    /// Mutable slot at the current position.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.store.slot_mut(self.position.offset)
    }

    /// Write `value` into the slot at the current position.
    pub fn set(&mut self, value: T) {
        *self.get_mut() = value;
    }
}

impl<T> Localizable for RandomAccessMut<'_, T> {
    fn num_dimensions(&self) -> usize {
        self.position.pos.len()
    }

    fn position(&self, d: usize) -> i64 {
        self.position.pos[d]
    }

    fn real_position(&self, d: usize) -> f64 {
        self.position.real[d]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_store() -> ArrayStore<i64> {
        // slot value == linear offset, written through the mut access
        let mut s: ArrayStore<i64> = ArrayStore::new(&[4, 5], 1).unwrap();
        let mut a = s.random_access_mut();
        for y in 0..5 {
            for x in 0..4 {
                a.set_position(&[x, y]).unwrap();
                a.set(x + 4 * y);
            }
        }
        s
    }

    #[test]
    fn set_position_reaches_the_expected_slot() {
        let s = filled_store();
        let mut a = s.random_access();
        a.set_position(&[3, 2]).unwrap();
        assert_eq!(*a.get(), 11);
        assert_eq!(a.offset(), 11);
    }

    #[test]
    fn move_by_updates_offset_incrementally() {
        let s = filled_store();
        let mut a = s.random_access();
        a.set_position(&[1, 1]).unwrap();
        a.move_by(&[2, 3]).unwrap();
        assert_eq!(a.position(0), 3);
        assert_eq!(a.position(1), 4);
        assert_eq!(*a.get(), 19);
    }

    #[test]
    fn wrong_arity_is_a_dimension_mismatch() {
        let s = filled_store();
        let mut a = s.random_access();
        assert_eq!(
            a.set_position(&[1, 2, 3]).unwrap_err(),
            GridError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert_eq!(
            a.move_by(&[1]).unwrap_err(),
            GridError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn real_position_tracks_fractional_moves() {
        let s = filled_store();
        let mut a = s.random_access();
        a.set_position_real(&[1.5, 2.5]).unwrap();
        assert_eq!(a.position(0), 1);
        assert_eq!(a.position(1), 2);
        assert_eq!(a.real_position(0), 1.5);
        assert_eq!(a.real_position(1), 2.5);

        a.move_real(&[0.25, 0.25]).unwrap();
        assert_eq!(a.real_position(0), 1.75);
        assert_eq!(a.position(0), 1);

        a.move_real(&[0.25, 0.25]).unwrap();
        assert_eq!(a.real_position(0), 2.0);
        assert_eq!(a.position(0), 2);
        assert_eq!(a.position(1), 3);
        assert_eq!(*a.get(), 2 + 4 * 3);
    }

    #[test]
    fn fractional_moves_accumulate_without_truncation_loss() {
        let s = filled_store();
        let mut stepped = s.random_access();
        let mut direct = s.random_access();
        stepped.set_position(&[0, 0]).unwrap();
        for _ in 0..10 {
            stepped.move_real(&[0.25, 0.125]).unwrap();
        }
        direct.set_position_real(&[2.5, 1.25]).unwrap();
        for d in 0..2 {
            assert!((stepped.real_position(d) - direct.real_position(d)).abs() < 1e-9);
            assert_eq!(stepped.position(d), direct.position(d));
        }
        assert_eq!(stepped.offset(), direct.offset());
    }

    #[test]
    fn set_position_from_copies_the_real_position() {
        let s = filled_store();
        let mut a = s.random_access();
        let mut b = s.random_access();
        a.set_position_real(&[1.5, 2.5]).unwrap();
        b.set_position_from(&a).unwrap();
        assert_eq!(b.real_position(0), 1.5);
        assert_eq!(b.real_position(1), 2.5);
        assert_eq!(b.position(0), 1);
    }

    #[test]
    fn per_axis_operations_agree_with_vector_forms() {
        let s = filled_store();
        let mut a = s.random_access();
        let mut b = s.random_access();
        a.set_position(&[2, 3]).unwrap();
        b.set_axis(2, 0);
        b.set_axis(3, 1);
        assert_eq!(a.offset(), b.offset());
        a.move_by(&[1, -2]).unwrap();
        b.move_axis(1, 0);
        b.move_axis(-2, 1);
        assert_eq!(a.offset(), b.offset());
        assert_eq!(*a.get(), *b.get());
    }

    #[test]
    fn independent_accessors_do_not_interfere() {
        let s = filled_store();
        let mut a = s.random_access();
        let mut b = s.random_access();
        a.set_position(&[3, 4]).unwrap();
        b.set_position(&[0, 1]).unwrap();
        assert_eq!(*a.get(), 19);
        assert_eq!(*b.get(), 4);
        a.move_by(&[-1, 0]).unwrap();
        assert_eq!(*b.get(), 4);
    }
}
