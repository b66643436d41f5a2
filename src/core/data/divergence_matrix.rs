use thiserror::Error;

/// Marks a cell whose orbit stayed within the modulus threshold for the whole budget.
pub const INTERIOR: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DivergenceMatrixError {
    #[error("matrix of {rows}x{cols} needs {expected} values, got {actual}")]
    BoundsMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

/// Row-major grid of escape steps. Row 0 is the top of the rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceMatrix {
    rows: usize,
    cols: usize,
    values: Vec<i32>,
}

impl DivergenceMatrix {
    pub fn from_values(
        rows: usize,
        cols: usize,
        values: Vec<i32>,
    ) -> Result<Self, DivergenceMatrixError> {
        let expected = rows * cols;

        if values.len() != expected {
            return Err(DivergenceMatrixError::BoundsMismatch {
                rows,
                cols,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self { rows, cols, values })
    }

    /// For producers that sized `values` from `rows` and `cols` themselves.
    pub(crate) fn from_filled_cells(rows: usize, cols: usize, values: Vec<i32>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);

        Self { rows, cols, values }
    }

    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: i32) -> Self {
        Self {
            rows,
            cols,
            values: vec![value; rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        self.values.get(row * self.cols + col).copied()
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}
