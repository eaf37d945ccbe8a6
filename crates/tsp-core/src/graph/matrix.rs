use crate::graph::{Graph, Node};
use crate::matrix::SquareMatrix;

/// A graph defined directly by an explicit weight matrix.
///
/// Useful for callers that already hold pairwise weights, and for exercising
/// solvers on fixtures that are not realizable as grid points (such as the
/// asymmetric matrix from Little et al.'s paper).
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    weights: SquareMatrix<i32>,
}

impl MatrixGraph {
    /// Builds a graph from row-major `weights` of size `dimension * dimension`.
    pub fn from_weights(weights: Vec<i32>, dimension: usize) -> Self {
        Self {
            weights: SquareMatrix::from_data(weights, dimension),
        }
    }
}

impl Graph for MatrixGraph {
    fn num_vertices(&self) -> usize {
        self.weights.dimension()
    }

    fn weight(&self, from: Node, to: Node) -> i32 {
        *self.weights.get(from.0, to.0)
    }
}
