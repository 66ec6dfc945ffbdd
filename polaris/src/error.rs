use thiserror::Error;

/// Errors returned by the coordinate transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The input grid does not report exactly two dimensions.
    #[error("expected 2 dimensions, found {found}")]
    InvalidDimensionality { found: usize },
}

pub type TransformResult<T> = Result<T, TransformError>;
