//! Index arithmetic shared by the transforms.

use crate::error::{TransformError, TransformResult};
use crate::grid::Grid;

/// `n mod k` mapped into `[0, k)`, also for negative `n`.
///
/// Exact negative multiples of `k` give `0`.
#[inline]
pub fn positive_mod(n: isize, k: isize) -> isize {
    debug_assert!(k > 0, "modulus must be positive, got {k}");
    n.rem_euclid(k)
}

/// Extracts `(rows, cols)`, rejecting anything that is not exactly 2D.
pub(crate) fn planar_dims<G: Grid>(grid: &G) -> TransformResult<(usize, usize)> {
    let dims = grid.dimensions();
    match dims {
        &[rows, cols] => Ok((rows, cols)),
        _ => {
            tracing::debug!(found = dims.len(), "rejecting grid that is not 2D");
            Err(TransformError::InvalidDimensionality { found: dims.len() })
        }
    }
}

/// Floor half of a dimension as a signed offset.
#[inline]
pub(crate) fn half(len: usize) -> isize {
    (len / 2) as isize
}
