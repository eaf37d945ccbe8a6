use tsp_core::edge_cost::EdgeCost;
use tsp_core::graph::{Edge, Graph, Node};
use tsp_core::matrix::SquareMatrix;
use tsp_core::tour::Tour;

use crate::little::cost_matrix::CostMatrix;

/// A node in the branch-and-bound search tree.
///
/// Each node owns the list of edges committed to the tour and a bit matrix of
/// forbidden edges. Children are created by cloning the parent and applying a
/// single mutation: committing the parent's branching edge or forbidding it.
/// Nodes never point back at their parents; the driver's explicit stack holds
/// the tree shape.
pub(super) struct TreeNode<'a, G> {
    graph: &'a G,
    include: Vec<Edge>,
    exclude: SquareMatrix<bool>,
    // branching state, valid only after a bound calculation
    next_edge: Option<Edge>,
    has_exclude_branch: bool,
    lower_bound: EdgeCost,
}

impl<'a, G> Clone for TreeNode<'a, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            next_edge: self.next_edge,
            has_exclude_branch: self.has_exclude_branch,
            lower_bound: self.lower_bound,
        }
    }
}

impl<'a, G: Graph> TreeNode<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        let num_vertices = graph.num_vertices();
        let mut node = Self {
            graph,
            include: Vec::with_capacity(num_vertices),
            exclude: SquareMatrix::new(num_vertices, false),
            next_edge: None,
            has_exclude_branch: false,
            lower_bound: EdgeCost::Infinite,
        };
        // no self-loops
        for diagonal in 0..num_vertices {
            node.add_exclude(Edge::new(Node(diagonal), Node(diagonal)));
        }
        node
    }

    pub fn include_child(parent: &Self) -> Self {
        let mut child = parent.clone();
        child.add_include(parent.branching_edge());
        child
    }

    pub fn exclude_child(parent: &Self) -> Self {
        let mut child = parent.clone();
        child.add_exclude(parent.branching_edge());
        child
    }

    /// Commits `edge` to the tour and forbids the edge that would close the
    /// resulting partial path into a premature subtour.
    pub fn add_include(&mut self, edge: Edge) {
        // find the longest chain of already-included edges extending through
        // `edge`
        let mut chain_first = edge.from;
        let mut chain_last = edge.to;
        let mut extended = true;
        while extended {
            extended = false;
            for &check in &self.include {
                if check.to == chain_first {
                    chain_first = check.from;
                    extended = true;
                    break;
                } else if check.from == chain_last {
                    chain_last = check.to;
                    extended = true;
                    break;
                }
            }
        }

        self.include.push(edge);
        self.add_exclude(Edge::new(chain_last, chain_first));
    }

    pub fn add_exclude(&mut self, edge: Edge) {
        self.exclude.set(edge.from.0, edge.to.0, true);
        self.reset_calculated_state();
    }

    /// Reduces a cost matrix over this node to compute the lower bound and
    /// select the next branching edge.
    ///
    /// Returns `true` when a branching edge was found. Returns `false` when
    /// the node is terminal: complete (the include list is a full tour and
    /// the lower bound its exact length) or dead (the reduction was infinite
    /// and the lower bound is infinite).
    pub fn calc_lb_and_next_edge(&mut self) -> bool {
        let mut cost_matrix = CostMatrix::new(self.graph, &self.include, &self.exclude);
        let reduction = cost_matrix.reduce();
        if reduction.is_infinite() {
            // some available row or column lost its last finite cell
            self.lower_bound = EdgeCost::Infinite;
            self.reset_calculated_state();
            return false;
        }

        let zeros = find_zeros_and_penalties(&cost_matrix);
        let base_case = cost_matrix.condensed_size() == 2;
        self.lower_bound = EdgeCost::Finite(self.included_weight()) + reduction;

        // two edges left to add: choosing them is forced up to tie-breaking
        if base_case {
            return self.complete_base_case(&zeros);
        }

        debug_assert_eq!(zeros.len(), 1);
        let zero = zeros
            .first()
            .expect("a reduced matrix has a zero in every available row");
        self.next_edge = Some(zero.edge);
        self.has_exclude_branch = !zero.penalty.is_infinite();
        true
    }

    pub fn lower_bound(&self) -> EdgeCost {
        self.lower_bound
    }

    pub fn has_exclude_branch(&self) -> bool {
        self.has_exclude_branch
    }

    pub fn next_edge(&self) -> Option<Edge> {
        self.next_edge
    }

    /// Builds the tour from a complete include list.
    ///
    /// Valid only after [`Self::calc_lb_and_next_edge`] returned `false` with
    /// a finite lower bound.
    pub fn tsp_tour(&self) -> Tour {
        debug_assert_eq!(self.include.len(), self.graph.num_vertices());

        // bucket the included edges by source vertex, then follow the
        // successor pointers starting from vertex 0
        let mut successors = vec![Node(0); self.graph.num_vertices()];
        for edge in &self.include {
            successors[edge.from.0] = edge.to;
        }

        let mut vertices = Vec::with_capacity(self.graph.num_vertices());
        let mut vertex = Node(0);
        for _ in 0..self.graph.num_vertices() {
            vertices.push(vertex);
            vertex = successors[vertex.0];
        }
        assert_eq!(
            vertex,
            Node(0),
            "tour walk did not return to vertex 0; the include list is not a tour"
        );

        Tour {
            vertices,
            length: self.included_weight(),
        }
    }

    fn branching_edge(&self) -> Edge {
        self.next_edge
            .expect("branching edge requested before the bound calculation")
    }

    fn included_weight(&self) -> i32 {
        self.include
            .iter()
            .map(|&edge| self.graph.edge_weight(edge))
            .sum()
    }

    /// Completes the tour when only two edges remain: include the zero with
    /// the highest penalty, then the unique zero completing the matching.
    fn complete_base_case(&mut self, zeros: &[CostMatrixZero]) -> bool {
        let (first, rest) = zeros
            .split_first()
            .expect("the base case has a zero in each of its two rows");
        let mut chosen = *first;
        for &zero in rest {
            if zero.penalty > chosen.penalty {
                chosen = zero;
            }
        }
        self.add_include(chosen.edge);

        let closing = zeros
            .iter()
            .find(|zero| zero.edge.from != chosen.edge.from && zero.edge.to != chosen.edge.to)
            .expect("a zero completing the tour exists in the base case");
        self.add_include(closing.edge);

        // the include list is now a full tour; its weight is the exact bound
        self.lower_bound = EdgeCost::Finite(self.included_weight());
        self.reset_calculated_state();
        false
    }

    // Adding an include or exclude invalidates the branching edge computed
    // for the previous constraint set.
    fn reset_calculated_state(&mut self) {
        self.next_edge = None;
        self.has_exclude_branch = false;
    }
}

/// A zero cell of the reduced matrix, with the penalty for excluding it: the
/// cheapest other exit from its row plus the cheapest other entry to its
/// column.
#[derive(Debug, Clone, Copy)]
pub(super) struct CostMatrixZero {
    pub edge: Edge,
    pub penalty: EdgeCost,
}

#[derive(Clone, Copy)]
struct Cell {
    edge: Edge,
    cost: EdgeCost,
}

/// The two cheapest cells of a row or column, costs ascending. Earlier cells
/// win ties so scans stay deterministic.
#[derive(Clone, Copy)]
struct TwoSmallest {
    first: Option<Cell>,
    second: Option<Cell>,
}

impl TwoSmallest {
    const EMPTY: TwoSmallest = TwoSmallest {
        first: None,
        second: None,
    };

    fn update(&mut self, cell: Cell) {
        match self.first {
            None => self.first = Some(cell),
            Some(first) if cell.cost < first.cost => {
                self.second = self.first;
                self.first = Some(cell);
            }
            Some(_) => match self.second {
                None => self.second = Some(cell),
                Some(second) if cell.cost < second.cost => self.second = Some(cell),
                Some(_) => {}
            },
        }
    }

    /// The cheapest tracked cost at a cell other than `edge`, infinite when
    /// no such cell exists.
    fn penalty_excluding(&self, edge: Edge) -> EdgeCost {
        match self.first {
            Some(first) if first.edge != edge => first.cost,
            _ => self.second.map_or(EdgeCost::Infinite, |cell| cell.cost),
        }
    }
}

/// Scans the reduced matrix once, tracking the two smallest cells per row and
/// column, and selects zeros for branching.
///
/// In the base case (condensed size 2) every zero is returned with its
/// penalty. Otherwise the result is a single zero: the first one whose
/// exclusion would strand exactly one of its row or column (its inclusion is
/// forced, penalty infinite), or failing that the zero with the maximum
/// penalty, ties broken by scan order.
fn find_zeros_and_penalties<G: Graph>(cost_matrix: &CostMatrix<'_, G>) -> Vec<CostMatrixZero> {
    let mut row_smallest = vec![TwoSmallest::EMPTY; cost_matrix.actual_size()];
    let mut column_smallest = vec![TwoSmallest::EMPTY; cost_matrix.actual_size()];
    let mut zero_edges: Vec<Edge> = Vec::new();

    for (edge, cost) in cost_matrix.cells() {
        if cost == EdgeCost::ZERO {
            zero_edges.push(edge);
        }
        let cell = Cell { edge, cost };
        row_smallest[edge.from.0].update(cell);
        column_smallest[edge.to.0].update(cell);
    }

    if cost_matrix.condensed_size() == 2 {
        return zero_edges
            .iter()
            .map(|&edge| {
                let row_penalty = row_smallest[edge.from.0].penalty_excluding(edge);
                let column_penalty = column_smallest[edge.to.0].penalty_excluding(edge);
                CostMatrixZero {
                    edge,
                    penalty: row_penalty + column_penalty,
                }
            })
            .collect();
    }

    let mut best: Option<CostMatrixZero> = None;
    for &edge in &zero_edges {
        let row_penalty = row_smallest[edge.from.0].penalty_excluding(edge);
        let column_penalty = column_smallest[edge.to.0].penalty_excluding(edge);

        // excluding this zero would disconnect the residual graph on exactly
        // one side, so including it is forced and no exclude branch exists
        if row_penalty.is_infinite() != column_penalty.is_infinite() {
            return vec![CostMatrixZero {
                edge,
                penalty: EdgeCost::Infinite,
            }];
        }

        let zero = CostMatrixZero {
            edge,
            penalty: row_penalty + column_penalty,
        };
        best = match best {
            None => Some(zero),
            Some(current) if zero.penalty > current.penalty => Some(zero),
            Some(current) => Some(current),
        };
    }

    best.into_iter().collect()
}
