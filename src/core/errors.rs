use std::time::Duration;

use thiserror::Error;

use crate::core::actions::generate_fractal::fill_matrix::FillMatrixError;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::storage::image_folder::StorageError;

/// Everything that can abort a single render request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Validation(#[from] JuliaError),
    #[error(
        "threads took too long and were terminated after {elapsed:?} on a {rows}x{cols} image; \
         please consider adjusting input parameters"
    )]
    Timeout {
        rows: usize,
        cols: usize,
        elapsed: Duration,
    },
    #[error("render of a {rows}x{cols} image was interrupted after {elapsed:?} while filling the matrix")]
    Interrupted {
        rows: usize,
        cols: usize,
        elapsed: Duration,
    },
    #[error(transparent)]
    Io(#[from] StorageError),
}

impl From<FillMatrixError> for RenderError {
    fn from(err: FillMatrixError) -> Self {
        match err {
            FillMatrixError::Timeout {
                rows,
                cols,
                elapsed,
                ..
            } => Self::Timeout {
                rows,
                cols,
                elapsed,
            },
            FillMatrixError::Interrupted {
                rows,
                cols,
                elapsed,
            } => Self::Interrupted {
                rows,
                cols,
                elapsed,
            },
        }
    }
}
