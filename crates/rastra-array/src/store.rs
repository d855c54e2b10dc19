//! The dense array store: exclusive owner of one flat element buffer.

use rastra_core::index;
use rastra_core::{GridError, Interval, IterationOrder};

use crate::cursor::{ArrayCursor, ArrayLocalizingCursor};
use crate::out_of_bounds::{ExtendedRandomAccess, OutOfBounds};
use crate::random_access::{RandomAccess, RandomAccessMut};

/// A dense n-dimensional store backed by a single flat buffer.
///
/// Buffer length is `Π(dims) * entities_per_element`; an element may
/// occupy several consecutive buffer slots (multi-slot encodings such
/// as packed complex or bit-packed samples). The store owns the buffer
/// exclusively — accessors borrow it and carry their own position
/// state, so any number of read accessors can traverse one store
/// independently. Writes go through the single [`RandomAccessMut`] or
/// [`slot_mut`](ArrayStore::slot_mut); the borrow checker enforces the
/// one-writer rule.
///
/// Capacity is capped at [`ArrayStore::MAX_ENTITIES`] buffer slots.
/// The cap is an explicit check at construction, not a silent
/// overflow.
#[derive(Clone, Debug)]
pub struct ArrayStore<T> {
    buf: Vec<T>,
    dims: Vec<i64>,
    steps: Vec<i64>,
    entities_per_element: usize,
    interval: Interval,
}

impl<T: Clone + Default> ArrayStore<T> {
    /// Maximum buffer length in entities.
    ///
    /// Flat buffers in this engine are indexed through 32-bit-safe
    /// offsets; requests beyond this fail with
    /// [`GridError::AllocationTooLarge`].
    pub const MAX_ENTITIES: u64 = i32::MAX as u64;

    /// Allocate a zero-initialized store.
    ///
    /// `dims` must have at least one axis and no negative extent;
    /// `entities_per_element` must be at least 1.
    pub fn new(dims: &[i64], entities_per_element: usize) -> Result<Self, GridError> {
        let interval = Interval::from_size(dims)?;
        if entities_per_element == 0 {
            return Err(GridError::InvalidDimensions {
                reason: "entities_per_element must be at least 1".into(),
            });
        }
        // Saturating product: an overflowing request must fail the cap
        // below, never wrap past it.
        let entities = interval
            .num_elements()
            .saturating_mul(entities_per_element as u64);
        if entities > Self::MAX_ENTITIES {
            return Err(GridError::AllocationTooLarge {
                requested: entities,
                max: Self::MAX_ENTITIES,
            });
        }
        let steps = index::allocation_steps_with_entities(dims, entities_per_element as i64);
        Ok(Self {
            buf: vec![T::default(); entities as usize],
            dims: dims.to_vec(),
            steps,
            entities_per_element,
            interval,
        })
    }
}

impl<T> ArrayStore<T> {
    /// Number of axes.
    pub fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    /// Extent on axis `d`.
    pub fn dimension(&self, d: usize) -> i64 {
        self.dims[d]
    }

    /// Per-axis extents.
    pub fn dimensions(&self) -> &[i64] {
        &self.dims
    }

    /// Number of elements (`Π(dims)`, independent of the entity
    /// multiplier).
    pub fn size(&self) -> u64 {
        self.interval.num_elements()
    }

    /// Per-axis allocation steps in buffer entities
    /// (`steps[0] == entities_per_element`).
    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Buffer slots per element.
    pub fn entities_per_element(&self) -> usize {
        self.entities_per_element
    }

    /// The store's coordinate extent (zero minimum on every axis).
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The slot at a linear entity offset.
    ///
    /// Offset validity is the accessor's contract; this is the hot
    /// path and performs no bounds check beyond the slice's own.
    #[inline]
    pub fn slot(&self, offset: i64) -> &T {
        &self.buf[offset as usize]
    }

    /// Mutable slot at a linear entity offset.
    #[inline]
    pub fn slot_mut(&mut self, offset: i64) -> &mut T {
        &mut self.buf[offset as usize]
    }

    /// A read-only random access positioned at the origin.
    pub fn random_access(&self) -> RandomAccess<'_, T> {
        RandomAccess::new(self)
    }

    /// The writing random access. Exclusive: no other accessor may be
    /// live while it exists.
    pub fn random_access_mut(&mut self) -> RandomAccessMut<'_, T> {
        RandomAccessMut::new(self)
    }

    /// A sequential cursor that localizes lazily (tracks only its
    /// linear offset).
    pub fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self)
    }

    /// A sequential cursor that additionally tracks explicit
    /// coordinates on every step.
    pub fn localizing_cursor(&self) -> ArrayLocalizingCursor<'_, T> {
        ArrayLocalizingCursor::new(self)
    }

    /// A random access whose out-of-bounds queries are resolved by
    /// `strategy` instead of being errors.
    pub fn extended_random_access(&self, strategy: OutOfBounds<T>) -> ExtendedRandomAccess<'_, T> {
        ExtendedRandomAccess::new(self, strategy)
    }

    /// Whether `other` may be traversed in lockstep with this store:
    /// same dimensionality and per-axis extents.
    pub fn equal_iteration_order(&self, other: &dyn IterationOrder) -> bool {
        rastra_core::traits::equal_iteration_order(self, other)
    }
}

impl<T> IterationOrder for ArrayStore<T> {
    fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    fn dimension(&self, d: usize) -> i64 {
        self.dims[d]
    }
}
