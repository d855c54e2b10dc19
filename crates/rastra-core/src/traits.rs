//! Accessor trait contracts shared across the workspace.

/// Something positioned at an n-dimensional grid coordinate.
///
/// One canonical representation — an `i64` grid position plus an `f64`
/// real position — replaces the per-numeric-type accessor overloads of
/// older designs. The real position differs from the grid position only
/// for accessors that have been moved by fractional deltas.
pub trait Localizable {
    /// Number of axes.
    fn num_dimensions(&self) -> usize;

    /// Grid position on axis `d`.
    fn position(&self, d: usize) -> i64;

    /// Real-valued position on axis `d`.
    ///
    /// Defaults to the grid position; accessors carrying a floating
    /// shadow override this.
    fn real_position(&self, d: usize) -> f64 {
        self.position(d) as f64
    }

    /// Write the grid position into `out`.
    fn localize(&self, out: &mut [i64]) {
        for d in 0..self.num_dimensions() {
            out[d] = self.position(d);
        }
    }

    /// Write the real-valued position into `out`.
    fn localize_real(&self, out: &mut [f64]) {
        for d in 0..self.num_dimensions() {
            out[d] = self.real_position(d);
        }
    }
}

/// A stateful sequential iterator over an interval's coordinates.
///
/// Scan order is fixed: axis 0 varies fastest, carrying into axis 1 on
/// overflow, and so on. A cursor starts uninitialized — positioned
/// before the first coordinate — and the first [`fwd`](Cursor::fwd)
/// lands on the first coordinate. Dereference is undefined while
/// uninitialized or after exhaustion.
///
/// # Invariant
///
/// For any mixture of `fwd` and `jump_fwd` calls, the visited
/// coordinate sequence equals direct enumeration in scan order:
/// `jump_fwd(a)` followed by `jump_fwd(b)` lands where `jump_fwd(a + b)`
/// would.
pub trait Cursor: Localizable {
    /// Return to the uninitialized state, before the first coordinate.
    fn reset(&mut self);

    /// Advance to the successor coordinate in scan order.
    fn fwd(&mut self);

    /// Advance by exactly `steps` successor steps.
    fn jump_fwd(&mut self, steps: u64);

    /// Whether a successor coordinate exists.
    fn has_next(&self) -> bool;
}

/// Extent comparison for zip-safety of iterables.
///
/// Two iterables may be traversed in lockstep iff they agree on
/// dimensionality and every per-axis extent. Offsets, element types,
/// and predicate internals are irrelevant to this comparison.
pub trait IterationOrder {
    /// Number of axes.
    fn num_dimensions(&self) -> usize;

    /// Extent on axis `d`.
    fn dimension(&self, d: usize) -> i64;
}

/// Whether `a` and `b` share dimensionality and every per-axis extent.
pub fn equal_iteration_order(a: &dyn IterationOrder, b: &dyn IterationOrder) -> bool {
    a.num_dimensions() == b.num_dimensions()
        && (0..a.num_dimensions()).all(|d| a.dimension(d) == b.dimension(d))
}
