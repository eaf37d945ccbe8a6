/// A square matrix stored in a flat row-major `Vec`.
///
/// Used for dense weight matrices and for the per-node exclusion bit matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    dimension: usize,
}

impl<T: Clone> SquareMatrix<T> {
    /// A `dimension` x `dimension` matrix with every cell set to `value`.
    pub fn new(dimension: usize, value: T) -> Self {
        Self {
            data: vec![value; dimension * dimension],
            dimension,
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Wraps row-major `data` as a square matrix.
    ///
    /// Panics if `data` does not hold exactly `dimension * dimension` cells.
    pub fn from_data(data: Vec<T>, dimension: usize) -> Self {
        assert_eq!(
            data.len(),
            dimension * dimension,
            "matrix data does not match dimension"
        );
        Self { data, dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> &T {
        &self.data[row * self.dimension + column]
    }

    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self.data[row * self.dimension + column] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_are_row_major() {
        let mut matrix = SquareMatrix::new(3, 0);
        matrix.set(1, 2, 42);
        assert_eq!(*matrix.get(1, 2), 42);
        assert_eq!(*matrix.get(2, 1), 0);

        let from_data = SquareMatrix::from_data(vec![1, 2, 3, 4], 2);
        assert_eq!(*from_data.get(0, 1), 2);
        assert_eq!(*from_data.get(1, 0), 3);
    }

    #[test]
    #[should_panic(expected = "does not match dimension")]
    fn from_data_rejects_wrong_length() {
        let _ = SquareMatrix::from_data(vec![1, 2, 3], 2);
    }
}
