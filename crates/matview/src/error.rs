use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by matrix construction, lane arithmetic and persistence.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The buffer cannot hold `rows * cols` elements.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    InvalidDimensions { rows: usize, cols: usize, len: usize },

    /// An element-wise operand differs in length from the lane.
    #[error("length mismatch: lane has {expected} elements, operand has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Malformed matrix text. `row` and `column` are 1-based; `column` is 0
    /// when the reader could not attribute the failure to a field.
    #[error("parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// A file could not be read, written or have its parent created.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persistence separator that does not fit in one ASCII byte.
    #[error("separator {0:?} is not a single ASCII byte")]
    UnsupportedSeparator(char),
}

impl MatrixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatrixError::Io {
            path: path.into(),
            source,
        }
    }
}
