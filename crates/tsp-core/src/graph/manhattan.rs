use std::fmt;

use crate::graph::{Graph, Node};
use crate::matrix::SquareMatrix;

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Complete graph over grid points with L1 (Manhattan) edge weights.
///
/// Weights are precomputed into a dense matrix at construction; the graph is
/// immutable for the duration of a solve.
#[derive(Debug, Clone)]
pub struct ManhattanGraph {
    world_size: i32,
    weights: SquareMatrix<i32>,
}

impl ManhattanGraph {
    pub fn new(world_size: i32, points: &[Point]) -> Self {
        let dimension = points.len();
        let mut weights = SquareMatrix::new(dimension, 0);
        for (row, a) in points.iter().enumerate() {
            for (column, b) in points.iter().enumerate() {
                weights.set(row, column, (a.x - b.x).abs() + (a.y - b.y).abs());
            }
        }
        Self { world_size, weights }
    }

    /// Advisory extent of the world the points were read from.
    pub fn world_size(&self) -> i32 {
        self.world_size
    }
}

impl Graph for ManhattanGraph {
    fn num_vertices(&self) -> usize {
        self.weights.dimension()
    }

    fn weight(&self, from: Node, to: Node) -> i32 {
        *self.weights.get(from.0, to.0)
    }
}

impl fmt::Display for ManhattanGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size of world: {}", self.world_size)?;
        writeln!(f, "Number of vertices: {}", self.num_vertices())?;
        for row in 0..self.num_vertices() {
            for column in 0..self.num_vertices() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.weights.get(row, column))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
