//! Errors that the font manager can return
use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    /// The requested font is not part of the font registry
    #[error("font index {index} out of range, {count} fonts available")]
    InvalidFontIndex { index: usize, count: usize },

    /// A construction parameter could not be understood
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The destination buffer could not be allocated
    #[error("cannot allocate bitmap: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type FontResult<T> = Result<T, FontError>;
