use std::ops::{Index, IndexMut};
use std::slice;

use crate::parallel::ParRowsMutAuto;
use rayon::prelude::*;

/// Dense row-major 2D storage addressed as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer2<T> {
    cells: Vec<T>,
    shape: [usize; 2],
}

impl<T> Buffer2<T> {
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            rows * cols,
            "cells length must equal rows * cols"
        );
        Self {
            cells,
            shape: [rows, cols],
        }
    }

    /// Builds a buffer by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self::new(rows, cols, cells)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows() && col < self.cols());
        &self.cells[row * self.cols() + col]
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows() && col < self.cols());
        let cols = self.cols();
        &mut self.cells[row * cols + col]
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> &[usize; 2] {
        &self.shape
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let cols = self.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

impl<T: Default + Clone> Buffer2<T> {
    pub fn new_default(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![T::default(); rows * cols],
            shape: [rows, cols],
        }
    }
}

impl<T: Clone> Buffer2<T> {
    pub fn new_filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cells: vec![value; rows * cols],
            shape: [rows, cols],
        }
    }
}

impl<T: Clone + Send + Sync> Buffer2<T> {
    /// Parallel counterpart of [`Buffer2::from_fn`]; rows are filled in rayon chunks.
    ///
    /// `fill` seeds the storage before evaluation and is overwritten everywhere.
    pub fn par_from_fn<F>(rows: usize, cols: usize, fill: T, f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        let mut cells = vec![fill; rows * cols];
        if cols > 0 {
            cells
                .par_rows_mut_auto(cols)
                .for_each(|(start_row, chunk)| {
                    for (local_row, line) in chunk.chunks_mut(cols).enumerate() {
                        let row = start_row + local_row;
                        for (col, cell) in line.iter_mut().enumerate() {
                            *cell = f(row, col);
                        }
                    }
                });
        }
        Self::new(rows, cols, cells)
    }
}

impl<T> Index<(usize, usize)> for Buffer2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.get(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Buffer2<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.get_mut(row, col)
    }
}

impl<'a, T> IntoIterator for &'a Buffer2<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<T> From<Buffer2<T>> for Vec<T> {
    #[inline]
    fn from(buffer: Buffer2<T>) -> Self {
        buffer.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_shape() {
        let buf = Buffer2::new(2, 3, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(buf.rows(), 2);
        assert_eq!(buf.cols(), 3);
        assert_eq!(buf.shape(), &[2, 3]);
        assert_eq!(buf.len(), 6);
        assert!(!buf.is_empty());
    }

    #[test]
    #[should_panic(expected = "cells length must equal rows * cols")]
    fn test_new_panics_on_size_mismatch() {
        Buffer2::new(2, 3, vec![1, 2, 3]);
    }

    #[test]
    fn test_row_major_addressing() {
        // row 0 = [10, 20, 30], row 1 = [40, 50, 60]
        let buf = Buffer2::new(2, 3, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(*buf.get(0, 0), 10);
        assert_eq!(*buf.get(0, 2), 30);
        assert_eq!(*buf.get(1, 0), 40);
        assert_eq!(buf[(1, 2)], 60);
        assert_eq!(buf.row(1), &[40, 50, 60]);
    }

    #[test]
    fn test_index_mut_tuple() {
        let mut buf = Buffer2::<i32>::new_default(2, 2);
        buf[(1, 0)] = 77;
        assert_eq!(buf.cells(), &[0, 0, 77, 0]);
    }

    #[test]
    fn test_from_fn_visits_every_cell() {
        let buf = Buffer2::from_fn(3, 4, |row, col| row * 10 + col);
        assert_eq!(buf[(2, 3)], 23);
        assert_eq!(buf[(0, 1)], 1);
        assert_eq!(buf.len(), 12);
    }

    #[test]
    fn test_par_from_fn_matches_from_fn() {
        let seq = Buffer2::from_fn(37, 11, |row, col| (row * 131 + col * 7) % 97);
        let par = Buffer2::par_from_fn(37, 11, 0, |row, col| (row * 131 + col * 7) % 97);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_par_from_fn_zero_cols() {
        let buf = Buffer2::par_from_fn(4, 0, 0u8, |_, _| 1);
        assert_eq!(buf.shape(), &[4, 0]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_new_filled() {
        let buf = Buffer2::new_filled(3, 2, 42u8);
        assert!(buf.iter().all(|&v| v == 42));
    }

    #[test]
    fn test_into_vec() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0];
        let buf = Buffer2::new(2, 2, data.clone());
        assert_eq!(buf.into_vec(), data);
    }
}
