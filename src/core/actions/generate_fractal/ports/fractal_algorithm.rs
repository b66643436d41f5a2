use crate::core::data::point::Point;

/// Per-cell escape-time computation over a fixed `rows x cols` grid.
///
/// Implementations must be pure in `compute`: the value for a cell may depend
/// only on the cell itself, so cells can be evaluated in any order on any thread.
pub trait FractalAlgorithm: Send + Sync {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn compute(&self, cell: Point) -> i32;
}
