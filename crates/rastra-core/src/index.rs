//! Linear indexing: bidirectional mapping between n-dimensional grid
//! positions and flat buffer offsets.
//!
//! Every accessor in the workspace derives its offset arithmetic from
//! the allocation steps computed here. The default layout is axis 0
//! fastest; the `_ordered` variants support stores whose memory layout
//! varies a different axis fastest.
//!
//! Precondition violations (mismatched slice lengths, `order` not a
//! permutation) are programmer errors, checked with `debug_assert!`
//! rather than surfaced as `Result`.

/// Compute the per-axis allocation steps for an axis-0-fastest layout.
///
/// `steps[0] = 1`, `steps[d] = steps[d - 1] * dims[d - 1]`.
pub fn allocation_steps(dims: &[i64]) -> Vec<i64> {
    allocation_steps_with_entities(dims, 1)
}

/// Allocation steps when each element occupies `entities_per_element`
/// consecutive buffer slots: `steps[0] = entities_per_element`.
pub fn allocation_steps_with_entities(dims: &[i64], entities_per_element: i64) -> Vec<i64> {
    debug_assert!(!dims.is_empty());
    let mut steps = vec![0; dims.len()];
    steps[0] = entities_per_element;
    for d in 1..dims.len() {
        steps[d] = steps[d - 1] * dims[d - 1];
    }
    steps
}

/// Allocation steps for a caller-specified axis order.
///
/// `order[0]` is the fastest-varying axis, `order[n - 1]` the slowest.
/// `allocation_steps_ordered(dims, &[0, 1, .., n - 1])` is equivalent
/// to [`allocation_steps`].
pub fn allocation_steps_ordered(dims: &[i64], order: &[usize]) -> Vec<i64> {
    debug_assert_eq!(dims.len(), order.len());
    let mut steps = vec![0; dims.len()];
    let mut step = 1;
    for &axis in order {
        steps[axis] = step;
        step *= dims[axis];
    }
    steps
}

/// Flat offset of `position` under the given steps: `Σ position[d] * steps[d]`.
#[inline]
pub fn index_for(position: &[i64], steps: &[i64]) -> i64 {
    debug_assert_eq!(position.len(), steps.len());
    position
        .iter()
        .zip(steps)
        .map(|(&p, &s)| p * s)
        .sum()
}

/// Inverse of [`index_for`] for an axis-0-fastest layout: recover the
/// grid position of `index`, writing into `position`.
///
/// Axes are peeled from slowest to fastest by successive integer
/// division and remainder.
pub fn position_for(index: i64, dims: &[i64], steps: &[i64], position: &mut [i64]) {
    debug_assert_eq!(dims.len(), steps.len());
    debug_assert_eq!(dims.len(), position.len());
    let mut rem = index;
    for d in (0..dims.len()).rev() {
        let p = rem / steps[d];
        rem -= p * steps[d];
        position[d] = p;
    }
}

/// Inverse of [`index_for`] for a caller-specified axis order.
///
/// `order` must match the one the steps were computed with.
pub fn position_for_ordered(
    index: i64,
    steps: &[i64],
    order: &[usize],
    position: &mut [i64],
) {
    debug_assert_eq!(steps.len(), order.len());
    debug_assert_eq!(steps.len(), position.len());
    let mut rem = index;
    for &axis in order.iter().rev() {
        let p = rem / steps[axis];
        rem -= p * steps[axis];
        position[axis] = p;
    }
}
