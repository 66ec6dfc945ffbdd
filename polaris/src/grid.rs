//! The grid capability the transforms are written against.

use common::Buffer2;
use num_complex::Complex64;
use num_traits::Zero;

use crate::config::Execution;

/// 2D complex grid stored in a [`Buffer2`].
pub type ComplexGrid = Buffer2<Complex64>;

/// A rectangular array addressed as `(row, col)`.
///
/// Transforms only read from their input through [`Grid::value`] and only
/// write to grids they allocated themselves.
pub trait Grid: Sized + Sync {
    type Elem: Copy + Zero + Send + Sync;

    /// Reported shape. The transforms require exactly two entries, `[rows, cols]`.
    fn dimensions(&self) -> &[usize];

    fn value(&self, row: usize, col: usize) -> Self::Elem;

    /// Zero-initialized `rows x cols` grid.
    fn allocate_empty(rows: usize, cols: usize) -> Self;

    fn set_value(&mut self, row: usize, col: usize, value: Self::Elem);

    /// Allocates a `rows x cols` grid and fills every cell from `f(row, col)`.
    ///
    /// The provided implementation is sequential regardless of `execution`;
    /// storage types with contiguous rows override it.
    fn build<F>(rows: usize, cols: usize, execution: Execution, f: F) -> Self
    where
        F: Fn(usize, usize) -> Self::Elem + Sync,
    {
        let _ = execution;
        let mut grid = Self::allocate_empty(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.set_value(row, col, f(row, col));
            }
        }
        grid
    }
}

impl<T> Grid for Buffer2<T>
where
    T: Copy + Zero + Send + Sync,
{
    type Elem = T;

    fn dimensions(&self) -> &[usize] {
        self.shape()
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> T {
        *self.get(row, col)
    }

    fn allocate_empty(rows: usize, cols: usize) -> Self {
        Buffer2::new_filled(rows, cols, T::zero())
    }

    #[inline]
    fn set_value(&mut self, row: usize, col: usize, value: T) {
        *self.get_mut(row, col) = value;
    }

    fn build<F>(rows: usize, cols: usize, execution: Execution, f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        match execution {
            Execution::Sequential => Buffer2::from_fn(rows, cols, f),
            Execution::Parallel => Buffer2::par_from_fn(rows, cols, T::zero(), f),
        }
    }
}
