//! Line-shaped local neighborhoods.

use rastra_array::RandomAccess;
use rastra_core::{Coord, Cursor, GridError, Interval, Localizable};

/// A periodic-line neighborhood: the `2 * span + 1` positions
/// `origin + k * increments` for `k` in `[-span, span]`.
///
/// The neighborhood drives the source random access it was created
/// with; dereference always goes through that access. Iteration
/// visits the positions in `k`-increasing order, stepping the access
/// by one increment vector per `fwd`.
#[derive(Clone, Debug)]
pub struct PeriodicLine<'a, T> {
    access: RandomAccess<'a, T>,
    origin: Coord,
    increments: Coord,
    span: i64,
}

impl<'a, T> PeriodicLine<'a, T> {
    /// Create a periodic line centered at `position`.
    ///
    /// Fails with [`GridError::DimensionMismatch`] when `position` or
    /// `increments` disagree with the access's dimensionality.
    pub fn new(
        position: &[i64],
        span: u64,
        increments: &[i64],
        access: RandomAccess<'a, T>,
    ) -> Result<Self, GridError> {
        let n = access.num_dimensions();
        if position.len() != n {
            return Err(GridError::DimensionMismatch {
                expected: n,
                actual: position.len(),
            });
        }
        if increments.len() != n {
            return Err(GridError::DimensionMismatch {
                expected: n,
                actual: increments.len(),
            });
        }
        Ok(Self {
            access,
            origin: Coord::from_slice(position),
            increments: Coord::from_slice(increments),
            span: span as i64,
        })
    }

    /// Number of axes.
    pub fn num_dimensions(&self) -> usize {
        self.origin.len()
    }

    /// Number of positions on the line.
    pub fn size(&self) -> u64 {
        2 * self.span as u64 + 1
    }

    /// Bounding box of the line's endpoints.
    pub fn interval(&self) -> Interval {
        let n = self.num_dimensions();
        let mut lo = vec![0; n];
        let mut hi = vec![0; n];
        for d in 0..n {
            let a = self.origin[d] - self.span * self.increments[d];
            let b = self.origin[d] + self.span * self.increments[d];
            lo[d] = a.min(b);
            hi[d] = a.max(b);
        }
        Interval::from_min_max(&lo, &hi).expect("endpoint box is well-formed")
    }

    /// A cursor over the line's positions.
    pub fn cursor(&self) -> PeriodicLineCursor<'a, T> {
        PeriodicLineCursor {
            access: self.access.clone(),
            origin: self.origin.clone(),
            increments: self.increments.clone(),
            span: self.span,
            k: -self.span - 1,
        }
    }
}

/// Cursor driving a random access along a [`PeriodicLine`].
#[derive(Clone, Debug)]
pub struct PeriodicLineCursor<'a, T> {
    access: RandomAccess<'a, T>,
    origin: Coord,
    increments: Coord,
    span: i64,
    k: i64,
}

impl<'a, T> PeriodicLineCursor<'a, T> {
    /// The element at the current line position.
    ///
    /// The position must lie inside the source store.
    pub fn get(&self) -> &'a T {
        self.access.get()
    }

    /// Advance and return the newly-current element, or `None` once
    /// the line is exhausted.
    pub fn next(&mut self) -> Option<&'a T> {
        if !self.has_next() {
            return None;
        }
        self.fwd();
        Some(self.get())
    }

    /// Reposition the access at `origin + k * increments`.
    fn seek(&mut self) {
        for d in 0..self.origin.len() {
            self.access
                .set_axis(self.origin[d] + self.k * self.increments[d], d);
        }
    }
}

impl<T> Localizable for PeriodicLineCursor<'_, T> {
    fn num_dimensions(&self) -> usize {
        self.origin.len()
    }

    fn position(&self, d: usize) -> i64 {
        self.access.position(d)
    }
}

impl<T> Cursor for PeriodicLineCursor<'_, T> {
    fn reset(&mut self) {
        self.k = -self.span - 1;
    }

    fn fwd(&mut self) {
        self.k += 1;
        if self.k == -self.span {
            // First landing: position absolutely at the line's start.
            self.seek();
        } else {
            // Repeat the increment pattern by one step.
            for d in 0..self.origin.len() {
                self.access.move_axis(self.increments[d], d);
            }
        }
    }

    fn jump_fwd(&mut self, steps: u64) {
        // Clamp to the line's end so oversized step counts exhaust
        // rather than wrapping `k` negative.
        let remaining = u64::try_from(self.span - self.k).unwrap_or(0);
        self.k = if steps > remaining {
            self.span
        } else {
            self.k + steps as i64
        };
        self.seek();
    }

    fn has_next(&self) -> bool {
        self.k < self.span
    }
}
