use tsp_core::edge_cost::EdgeCost;
use tsp_core::graph::{Edge, Graph, Node};
use tsp_core::matrix::SquareMatrix;

/// Reduced view of the graph's weight matrix for a single search node.
///
/// Rows whose vertex is already the source of an included edge and columns
/// whose vertex is already a target are skipped entirely; the remaining
/// "condensed" rows and columns are addressed through index mappings. Cell
/// values are computed lazily as the graph weight minus the row and column
/// reductions, with excluded cells reading as infinite.
///
/// The matrix borrows the node's exclusion matrix and must not outlive the
/// bound computation it was built for.
pub(super) struct CostMatrix<'a, G> {
    graph: &'a G,
    exclude: &'a SquareMatrix<bool>,
    // condensed index -> actual index, skipping consumed rows/columns
    row_mapping: Vec<usize>,
    column_mapping: Vec<usize>,
    // indexed by actual row/column
    row_reductions: Vec<i32>,
    column_reductions: Vec<i32>,
}

impl<'a, G: Graph> CostMatrix<'a, G> {
    pub fn new(graph: &'a G, include: &[Edge], exclude: &'a SquareMatrix<bool>) -> Self {
        let num_vertices = graph.num_vertices();
        let mut row_available = vec![true; num_vertices];
        let mut column_available = vec![true; num_vertices];
        for edge in include {
            row_available[edge.from.0] = false;
            column_available[edge.to.0] = false;
        }

        Self {
            graph,
            exclude,
            row_mapping: make_mapping(&row_available),
            column_mapping: make_mapping(&column_available),
            row_reductions: vec![0; num_vertices],
            column_reductions: vec![0; num_vertices],
        }
    }

    /// Number of rows (equivalently columns) still available.
    pub fn condensed_size(&self) -> usize {
        self.row_mapping.len()
    }

    pub fn actual_size(&self) -> usize {
        self.graph.num_vertices()
    }

    /// The reduced cost at actual indices `(row, column)`.
    pub fn cost(&self, row: usize, column: usize) -> EdgeCost {
        if *self.exclude.get(row, column) {
            return EdgeCost::Infinite;
        }
        EdgeCost::Finite(
            self.graph.weight(Node(row), Node(column))
                - self.row_reductions[row]
                - self.column_reductions[column],
        )
    }

    /// Subtracts each available row's minimum from its cells, then each
    /// available column's minimum, and returns the total subtracted. The
    /// total is a lower bound on the cost of completing the tour from here.
    ///
    /// Returns [`EdgeCost::Infinite`] when some available row or column has
    /// no finite cell left; the node is then infeasible and must be pruned.
    /// After a finite reduction every available row and column contains at
    /// least one zero.
    pub fn reduce(&mut self) -> EdgeCost {
        let mut decremented = 0;

        for condensed in 0..self.condensed_size() {
            let row = self.row_mapping[condensed];
            let minimum = self
                .row_costs(row)
                .min()
                .expect("an available row always has available cells");
            let EdgeCost::Finite(amount) = minimum else {
                return EdgeCost::Infinite;
            };
            self.row_reductions[row] = amount;
            decremented += amount;
        }

        for condensed in 0..self.condensed_size() {
            let column = self.column_mapping[condensed];
            let minimum = self
                .column_costs(column)
                .min()
                .expect("an available column always has available cells");
            let EdgeCost::Finite(amount) = minimum else {
                return EdgeCost::Infinite;
            };
            self.column_reductions[column] = amount;
            decremented += amount;
        }

        EdgeCost::Finite(decremented)
    }

    /// Row-major iteration over all cells in available rows and columns as
    /// `(edge, reduced cost)`, excluded cells reading as infinite.
    pub fn cells(&self) -> impl Iterator<Item = (Edge, EdgeCost)> + '_ {
        self.row_mapping.iter().flat_map(move |&row| {
            self.column_mapping.iter().map(move |&column| {
                (Edge::new(Node(row), Node(column)), self.cost(row, column))
            })
        })
    }

    fn row_costs(&self, row: usize) -> impl Iterator<Item = EdgeCost> + '_ {
        self.column_mapping
            .iter()
            .map(move |&column| self.cost(row, column))
    }

    fn column_costs(&self, column: usize) -> impl Iterator<Item = EdgeCost> + '_ {
        self.row_mapping.iter().map(move |&row| self.cost(row, column))
    }
}

// Map condensed index -> actual index such that condensed indices always
// point at available rows and columns.
fn make_mapping(available: &[bool]) -> Vec<usize> {
    available
        .iter()
        .enumerate()
        .filter_map(|(index, &open)| open.then_some(index))
        .collect()
}
