//! Configuration for the coordinate transforms.

use serde::{Deserialize, Serialize};

use crate::index::positive_mod;

/// How a source index that falls outside the grid is brought back in range.
///
/// Applies to both polar directions so a Cartesian → polar → Cartesian
/// round trip resolves its edges the same way each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Cyclic wraparound via positive modulo.
    #[default]
    Wrap,
    /// Per-axis clamp: negative indices go to 0, indices past the end to the last cell.
    Clamp,
}

impl BoundaryPolicy {
    /// Maps `index` into `[0, len)`. `len` must be non-zero.
    #[inline]
    pub fn resolve(self, index: isize, len: usize) -> usize {
        debug_assert!(len > 0);
        match self {
            BoundaryPolicy::Wrap => positive_mod(index, len as isize) as usize,
            BoundaryPolicy::Clamp => index.clamp(0, len as isize - 1) as usize,
        }
    }
}

/// Whether output cells are computed on the calling thread or across the rayon pool.
///
/// Both modes produce identical grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

/// Configuration for [`CoordinateTransformer`](crate::CoordinateTransformer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Edge handling for `cartesian_to_polar` and `polar_to_cartesian`.
    /// `raster_to_cartesian` and the shifts always wrap.
    pub boundary: BoundaryPolicy,
    /// Sequential or row-parallel evaluation of output cells.
    pub execution: Execution,
}

impl TransformConfig {
    pub fn with_boundary(self, boundary: BoundaryPolicy) -> Self {
        Self { boundary, ..self }
    }

    pub fn with_execution(self, execution: Execution) -> Self {
        Self { execution, ..self }
    }
}
