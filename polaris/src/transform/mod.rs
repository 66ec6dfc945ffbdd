//! Index remapping of 2D grids.
//!
//! Every transform builds a fresh output grid in which each cell is copied
//! from exactly one input cell. Values are never interpolated or modified.


use std::f64::consts::FRAC_PI_2;

use crate::config::TransformConfig;
use crate::error::TransformResult;
use crate::grid::Grid;
use crate::index::{half, planar_dims, positive_mod};

/// The remappings offered by [`CoordinateTransformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    CartesianToPolar,
    PolarToCartesian,
    RasterToCartesian,
    Translate,
    FftShift,
    IfftShift,
}

impl TransformKind {
    pub const ALL: [TransformKind; 6] = [
        TransformKind::CartesianToPolar,
        TransformKind::PolarToCartesian,
        TransformKind::RasterToCartesian,
        TransformKind::Translate,
        TransformKind::FftShift,
        TransformKind::IfftShift,
    ];
}

/// Applies coordinate remappings under a fixed [`TransformConfig`].
#[derive(Debug, Clone, Default)]
pub struct CoordinateTransformer {
    config: TransformConfig,
}

impl CoordinateTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn apply<G: Grid>(&self, kind: TransformKind, grid: &G) -> TransformResult<G> {
        match kind {
            TransformKind::CartesianToPolar => self.cartesian_to_polar(grid),
            TransformKind::PolarToCartesian => self.polar_to_cartesian(grid),
            TransformKind::RasterToCartesian => self.raster_to_cartesian(grid),
            TransformKind::Translate => self.translate(grid),
            TransformKind::FftShift => self.fft_shift(grid),
            TransformKind::IfftShift => self.ifft_shift(grid),
        }
    }

    /// Reads a Cartesian grid as polar samples of the same shape.
    ///
    /// Output `(i, j)` takes the input cell at `(floor(hypot(i, j)), floor(atan2(i, j)))`,
    /// brought into range by the configured [`BoundaryPolicy`](crate::BoundaryPolicy).
    /// `atan2` gives `π/2` on the `j = 0` column and `0` at the origin.
    pub fn cartesian_to_polar<G: Grid>(&self, grid: &G) -> TransformResult<G> {
        let (rows, cols) = planar_dims(grid)?;
        let boundary = self.config.boundary;

        Ok(self.remap(TransformKind::CartesianToPolar, grid, rows, cols, |i, j| {
            let (y, x) = (i as f64, j as f64);
            let radius = y.hypot(x);
            let angle = y.atan2(x);
            (
                boundary.resolve(radius.floor() as isize, rows),
                boundary.resolve(angle.floor() as isize, cols),
            )
        }))
    }

    /// Samples a polar grid along rays to produce a Cartesian grid of the same shape.
    ///
    /// Output column `x` is the radius and output row `y` the ray angle, spread over
    /// a quarter turn across the grid height:
    ///
    /// ```text
    /// θ = y · π/2 / rows
    /// source = (floor(x · sin θ), floor(x · cos θ))
    /// ```
    ///
    /// Out-of-range sources follow the configured [`BoundaryPolicy`](crate::BoundaryPolicy).
    pub fn polar_to_cartesian<G: Grid>(&self, grid: &G) -> TransformResult<G> {
        let (len_y, len_x) = planar_dims(grid)?;
        let boundary = self.config.boundary;

        Ok(self.remap(
            TransformKind::PolarToCartesian,
            grid,
            len_y,
            len_x,
            |cart_y, cart_x| {
                let theta = cart_y as f64 * FRAC_PI_2 / len_y as f64;
                let radius = cart_x as f64;
                let polar_x = (radius * theta.cos()).floor() as isize;
                let polar_y = (radius * theta.sin()).floor() as isize;
                (
                    boundary.resolve(polar_y, len_y),
                    boundary.resolve(polar_x, len_x),
                )
            },
        ))
    }

    /// Re-addresses a top-left-origin raster around the grid centre, Y pointing up.
    ///
    /// Output `(y, x)` has centred coordinates `cart_x = x - cols/2` and
    /// `cart_y = rows/2 - y`, and reads the input at
    /// `(cart_y mod rows, cart_x mod cols)`. The data origin therefore lands on the
    /// centre cell. Always wraps.
    pub fn raster_to_cartesian<G: Grid>(&self, grid: &G) -> TransformResult<G> {
        let (len_y, len_x) = planar_dims(grid)?;
        let (half_y, half_x) = (half(len_y), half(len_x));

        Ok(self.remap(TransformKind::RasterToCartesian, grid, len_y, len_x, |y, x| {
            let cart_x = x as isize - half_x;
            let cart_y = half_y - y as isize;
            (
                positive_mod(cart_y, len_y as isize) as usize,
                positive_mod(cart_x, len_x as isize) as usize,
            )
        }))
    }

    /// Cyclic quadrant swap.
    ///
    /// Output `(i, j)` reads `((i + rows/2) mod rows, (j - cols/2 + cols) mod cols)`.
    /// The row axis adds the half shift while the column axis subtracts it, so for
    /// odd shapes this is not an involution: applying it twice moves rows by
    /// `2·(rows/2)` and columns by `-2·(cols/2)`. On even shapes it equals
    /// [`fft_shift`](Self::fft_shift).
    pub fn translate<G: Grid>(&self, grid: &G) -> TransformResult<G> {
        let (rows, cols) = planar_dims(grid)?;
        let (half_r, half_c) = (half(rows), half(cols));

        Ok(self.remap(TransformKind::Translate, grid, rows, cols, |i, j| {
            (
                positive_mod(i as isize + half_r, rows as isize) as usize,
                positive_mod(j as isize - half_c + cols as isize, cols as isize) as usize,
            )
        }))
    }

    /// Moves the zero-frequency cell `(0, 0)` to `(rows/2, cols/2)`.
    pub fn fft_shift<G: Grid>(&self, grid: &G) -> TransformResult<G> {
        let (rows, cols) = planar_dims(grid)?;
        let (half_r, half_c) = (half(rows), half(cols));

        Ok(self.remap(TransformKind::FftShift, grid, rows, cols, |i, j| {
            (
                positive_mod(i as isize - half_r, rows as isize) as usize,
                positive_mod(j as isize - half_c, cols as isize) as usize,
            )
        }))
    }

    /// Inverse of [`fft_shift`](Self::fft_shift) for every shape.
    pub fn ifft_shift<G: Grid>(&self, grid: &G) -> TransformResult<G> {
        let (rows, cols) = planar_dims(grid)?;
        let (half_r, half_c) = (half(rows), half(cols));

        Ok(self.remap(TransformKind::IfftShift, grid, rows, cols, |i, j| {
            (
                positive_mod(i as isize + half_r, rows as isize) as usize,
                positive_mod(j as isize + half_c, cols as isize) as usize,
            )
        }))
    }

    /// Builds a `rows x cols` output where each cell copies `grid` at `source(row, col)`.
    fn remap<G, M>(
        &self,
        kind: TransformKind,
        grid: &G,
        rows: usize,
        cols: usize,
        source: M,
    ) -> G
    where
        G: Grid,
        M: Fn(usize, usize) -> (usize, usize) + Sync,
    {
        tracing::trace!(?kind, rows, cols, execution = ?self.config.execution, "remapping grid");

        G::build(rows, cols, self.config.execution, |row, col| {
            let (src_row, src_col) = source(row, col);
            grid.value(src_row, src_col)
        })
    }
}

/// [`CoordinateTransformer::cartesian_to_polar`] with the default configuration.
pub fn cartesian_to_polar<G: Grid>(grid: &G) -> TransformResult<G> {
    CoordinateTransformer::default().cartesian_to_polar(grid)
}

/// [`CoordinateTransformer::polar_to_cartesian`] with the default configuration.
pub fn polar_to_cartesian<G: Grid>(grid: &G) -> TransformResult<G> {
    CoordinateTransformer::default().polar_to_cartesian(grid)
}

pub fn raster_to_cartesian<G: Grid>(grid: &G) -> TransformResult<G> {
    CoordinateTransformer::default().raster_to_cartesian(grid)
}

pub fn translate<G: Grid>(grid: &G) -> TransformResult<G> {
    CoordinateTransformer::default().translate(grid)
}

pub fn fft_shift<G: Grid>(grid: &G) -> TransformResult<G> {
    CoordinateTransformer::default().fft_shift(grid)
}

pub fn ifft_shift<G: Grid>(grid: &G) -> TransformResult<G> {
    CoordinateTransformer::default().ifft_shift(grid)
}
