//! N-dimensional dense matrices as handed over by FFT/DSP producers.
//!
//! Unlike [`Buffer2`], a [`DenseMatrix`] may carry any number of axes, so the
//! transforms have to check its dimensionality before touching it.

use common::parallel::ParRowsMutAuto;
use common::Buffer2;
use num_complex::Complex64;
use num_traits::Zero;
use rayon::prelude::*;

use crate::config::Execution;
use crate::error::TransformError;
use crate::grid::Grid;
use crate::index::planar_dims;

pub type ComplexMatrix = DenseMatrix<Complex64>;

/// Row-major array with an arbitrary shape; the last axis varies fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}

impl<T> DenseMatrix<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            shape.iter().product::<usize>(),
            "data length must equal the product of the shape"
        );
        Self { data, shape }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Linear offset of `indices`, or `None` if the rank or any index is out of range.
    pub fn offset(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        indices
            .iter()
            .zip(&self.shape)
            .try_fold(0usize, |acc, (&idx, &len)| {
                (idx < len).then_some(acc * len + idx)
            })
    }

    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.offset(indices).map(|offset| &self.data[offset])
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut T> {
        self.offset(indices).map(move |offset| &mut self.data[offset])
    }

    #[inline]
    fn planar_offset(&self, row: usize, col: usize) -> usize {
        debug_assert_eq!(self.shape.len(), 2, "planar access on a non-2D matrix");
        debug_assert!(row < self.shape[0] && col < self.shape[1]);
        row * self.shape[1] + col
    }
}

impl<T: Zero + Clone> DenseMatrix<T> {
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self {
            data: vec![T::zero(); len],
            shape,
        }
    }
}

impl<T> Grid for DenseMatrix<T>
where
    T: Copy + Zero + Send + Sync,
{
    type Elem = T;

    fn dimensions(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> T {
        self.data[self.planar_offset(row, col)]
    }

    fn allocate_empty(rows: usize, cols: usize) -> Self {
        Self::zeros(vec![rows, cols])
    }

    #[inline]
    fn set_value(&mut self, row: usize, col: usize, value: T) {
        let offset = self.planar_offset(row, col);
        self.data[offset] = value;
    }

    fn build<F>(rows: usize, cols: usize, execution: Execution, f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        let mut matrix = Self::zeros(vec![rows, cols]);
        if cols == 0 {
            return matrix;
        }
        let fill_rows = |start_row: usize, chunk: &mut [T]| {
            for (local_row, line) in chunk.chunks_mut(cols).enumerate() {
                for (col, cell) in line.iter_mut().enumerate() {
                    *cell = f(start_row + local_row, col);
                }
            }
        };
        match execution {
            Execution::Sequential => fill_rows(0, &mut matrix.data),
            Execution::Parallel => matrix
                .data
                .par_rows_mut_auto(cols)
                .for_each(|(start_row, chunk)| fill_rows(start_row, chunk)),
        }
        matrix
    }
}

impl<T> From<Buffer2<T>> for DenseMatrix<T> {
    fn from(buffer: Buffer2<T>) -> Self {
        let shape = vec![buffer.rows(), buffer.cols()];
        Self::new(shape, buffer.into_vec())
    }
}

impl<T> TryFrom<DenseMatrix<T>> for Buffer2<T>
where
    T: Copy + Zero + Send + Sync,
{
    type Error = TransformError;

    fn try_from(matrix: DenseMatrix<T>) -> Result<Self, Self::Error> {
        let (rows, cols) = planar_dims(&matrix)?;
        Ok(Buffer2::new(rows, cols, matrix.into_vec()))
    }
}
