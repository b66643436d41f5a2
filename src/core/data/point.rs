/// A cell of the output grid: `x` is the column, `y` the row counted from the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    /// Row-major decomposition of a linear cell index.
    #[must_use]
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            x: index % cols,
            y: index / cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_row_major() {
        assert_eq!(Point::from_index(0, 3), Point { x: 0, y: 0 });
        assert_eq!(Point::from_index(2, 3), Point { x: 2, y: 0 });
        assert_eq!(Point::from_index(3, 3), Point { x: 0, y: 1 });
        assert_eq!(Point::from_index(11, 3), Point { x: 2, y: 3 });
    }
}
