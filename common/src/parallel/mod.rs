//! Parallel processing utilities.

use rayon::prelude::*;


/// Multiplier for number of chunks relative to CPU threads.
const CHUNKS_PER_THREAD: usize = 3;

/// Rows per chunk for a buffer of `rows` rows.
#[inline]
pub fn auto_chunk_rows(rows: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (rows / num_chunks).max(1)
}

/// Row-aligned mutable parallel chunks with automatic sizing.
pub trait ParRowsMutAuto<'a, T: Send + 'a> {
    /// Splits a row-major slice into chunks of whole rows.
    /// Yields `(chunk_start_row, chunk)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `cols` is 0 or the slice length is not a multiple of `cols`.
    fn par_rows_mut_auto(
        &'a mut self,
        cols: usize,
    ) -> impl IndexedParallelIterator<Item = (usize, &'a mut [T])> + 'a;
}

impl<'a, T: Send + 'a> ParRowsMutAuto<'a, T> for [T] {
    fn par_rows_mut_auto(
        &'a mut self,
        cols: usize,
    ) -> impl IndexedParallelIterator<Item = (usize, &'a mut [T])> + 'a {
        assert!(cols > 0, "cols must be > 0");
        assert_eq!(self.len() % cols, 0, "slice is not row-aligned");

        let chunk_rows = auto_chunk_rows(self.len() / cols);
        self.par_chunks_mut(cols * chunk_rows)
            .enumerate()
            .map(move |(idx, chunk)| (idx * chunk_rows, chunk))
    }
}
