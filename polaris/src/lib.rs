//! Polaris - coordinate remapping for 2D spectral grids.
//!
//! Relocates the cells of a complex grid (typically the output of a 2D FFT)
//! under Cartesian/polar, raster/centred and cyclic-shift mappings. Values are
//! copied, never interpolated.
//!
//! ```rust,ignore
//! use polaris::{ComplexGrid, CoordinateTransformer, TransformConfig};
//!
//! let spectrum: ComplexGrid = fft_2d(&image);
//! let centred = polaris::translate(&spectrum)?;
//!
//! let transformer = CoordinateTransformer::new(TransformConfig::default());
//! let polar = transformer.cartesian_to_polar(&centred)?;
//! ```

mod config;
mod error;
mod grid;
mod index;
mod matrix;
mod transform;

pub use common::Buffer2;

pub use config::{BoundaryPolicy, Execution, TransformConfig};
pub use error::{TransformError, TransformResult};
pub use grid::{ComplexGrid, Grid};
pub use index::positive_mod;
pub use matrix::{ComplexMatrix, DenseMatrix};
pub use transform::{
    cartesian_to_polar, fft_shift, ifft_shift, polar_to_cartesian, raster_to_cartesian,
    translate, CoordinateTransformer, TransformKind,
};
