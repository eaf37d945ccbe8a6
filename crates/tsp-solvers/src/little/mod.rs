/*!
This module contains an implementation of the branch-and-bound algorithm of
[Little, Murty, Sweeney and Karel](https://doi.org/10.1287/opre.11.6.972) for
solving the Traveling Salesperson Problem exactly.

## Top-level Description of the Algorithm

The algorithm searches over sets of directed edges committed to ("included
in") or forbidden from ("excluded from") the tour. At each search node it
reduces the remaining cost matrix: subtracting every row's minimum from its
cells and then every column's minimum leaves a matrix with a zero in every
row and column, and the total subtracted plus the weight of the included
edges is a lower bound on any tour respecting the node's constraints.

The node then branches on a zero of the reduced matrix, chosen to maximize
the *penalty*: the cheapest other exit from the zero's row plus the cheapest
other entry to its column, which is exactly how much the lower bound rises if
the zero is excluded. The include child commits the edge (condensing its row
and column away and forbidding the edge that would close the partial path
into a premature subtour); the exclude child forbids it. When only two edges
remain their choice is forced and the node completes a tour.

A depth-first driver keeps the best complete tour found so far as a global
upper bound and prunes every node whose lower bound reaches it.

## Call Structure of the Algorithm

- [`solve`] / [`solve_with_upper_bound`]: Set up the root node and drive the
  depth-first branch-and-bound loop over an explicit stack.
    - `evaluate`: Computes a node's bound and branching edge, deciding
      whether the node is expanded, pruned, or recorded as the best tour.
        - `TreeNode::calc_lb_and_next_edge`: Reduces a `CostMatrix` over the
          node, finds the zeros and penalties, and handles the two-edges-left
          base case.
    - `TreeNode::include_child` / `TreeNode::exclude_child`: Clone a parent
      and apply its branching edge. The exclude child is pushed first so the
      include branch is explored first, as suggested in the original paper.

## Determinism

Zero selection ties are broken by row-major scan order of the condensed
matrix and the include child is always expanded before its sibling, so two
runs on the same graph and upper bound produce identical branching and an
identical tour.
 */

use log::{debug, info, trace};
use tsp_core::edge_cost::EdgeCost;
use tsp_core::graph::{Graph, Node};
use tsp_core::tour::Tour;

mod cost_matrix;
mod tree_node;

use crate::little::tree_node::TreeNode;

/// Solves the TSP exactly with no prior upper bound.
pub fn solve<G: Graph>(graph: &G) -> Tour {
    solve_with_upper_bound(graph, EdgeCost::Infinite)
}

/// Solves the TSP exactly, pruning every search node whose lower bound
/// reaches `upper_bound`.
///
/// The bound is exclusive: pass a value strictly above a known feasible tour
/// length (or [`EdgeCost::Infinite`]). A bound at or below the optimum leaves
/// no tour to return and panics.
pub fn solve_with_upper_bound<G: Graph>(graph: &G, mut upper_bound: EdgeCost) -> Tour {
    if graph.num_vertices() == 0 {
        return Tour::default();
    }
    if graph.num_vertices() == 1 {
        return Tour {
            vertices: vec![Node(0)],
            length: 0,
        };
    }

    info!(
        "starting branch-and-bound solve on {} vertices",
        graph.num_vertices()
    );

    let mut root = TreeNode::new(graph);
    // placeholder; its infinite lower bound loses to any complete tour
    let mut best = TreeNode::new(graph);
    let mut nodes = Vec::new();

    if evaluate(&mut root, &mut best, upper_bound) {
        nodes.push(root);
    }

    while let Some(current) = nodes.pop() {
        if best.lower_bound() < upper_bound {
            upper_bound = best.lower_bound();
        }

        if current.has_exclude_branch() {
            let mut exclude = TreeNode::exclude_child(&current);
            if evaluate(&mut exclude, &mut best, upper_bound) {
                nodes.push(exclude);
            }
        }

        // pushed second, popped first: the include branch is explored before
        // its exclude sibling
        let mut include = TreeNode::include_child(&current);
        if evaluate(&mut include, &mut best, upper_bound) {
            nodes.push(include);
        }
    }

    assert!(
        best.lower_bound() <= upper_bound,
        "no tour exists below the provided upper bound"
    );
    best.tsp_tour()
}

/// Computes `node`'s lower bound and branching edge. Returns `true` when the
/// node should be expanded further; otherwise records it as the best tour if
/// it completed one cheaper than the current best.
fn evaluate<'a, G: Graph>(
    node: &mut TreeNode<'a, G>,
    best: &mut TreeNode<'a, G>,
    upper_bound: EdgeCost,
) -> bool {
    if node.calc_lb_and_next_edge() {
        if node.lower_bound() < upper_bound {
            return true;
        }
        trace!(
            "pruning node with lower bound {} >= upper bound {}",
            node.lower_bound().value(),
            upper_bound.value()
        );
        return false;
    }

    // terminal: either a complete tour or a dead node whose infinite lower
    // bound can never replace the best
    if node.lower_bound() < best.lower_bound() {
        debug!(
            "found a complete tour of length {}",
            node.lower_bound().value()
        );
        *best = node.clone();
    }
    false
}

#[cfg(test)]
mod tests {
    use tsp_core::graph::matrix::MatrixGraph;

    use super::*;

    fn paper_graph() -> MatrixGraph {
        MatrixGraph::from_weights(
            vec![
                0, 27, 43, 16, 30, 26, //
                7, 0, 16, 1, 30, 25, //
                20, 13, 0, 35, 5, 0, //
                21, 16, 25, 0, 18, 18, //
                12, 46, 27, 48, 0, 5, //
                23, 5, 5, 9, 5, 0,
            ],
            6,
        )
    }

    #[test]
    fn solves_the_paper_matrix() {
        let tour = solve(&paper_graph());
        let expected: Vec<Node> = [0, 3, 2, 4, 5, 1].into_iter().map(Node).collect();
        assert_eq!(tour.vertices, expected);
        assert_eq!(tour.length, 63);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let graph = paper_graph();
        assert_eq!(solve(&graph), solve(&graph));
    }

    #[test]
    fn a_feasible_upper_bound_preserves_the_optimum() {
        let graph = paper_graph();
        let tour = solve_with_upper_bound(&graph, EdgeCost::Finite(64));
        assert_eq!(tour.length, 63);

        let loose = solve_with_upper_bound(&graph, EdgeCost::Finite(10_000));
        assert_eq!(loose.length, 63);
    }

    #[test]
    fn empty_graph_yields_empty_tour() {
        let graph = MatrixGraph::from_weights(Vec::new(), 0);
        let tour = solve(&graph);
        assert!(tour.vertices.is_empty());
        assert_eq!(tour.length, 0);
    }

    #[test]
    fn single_vertex_tour_is_trivial() {
        let graph = MatrixGraph::from_weights(vec![0], 1);
        let tour = solve(&graph);
        assert_eq!(tour.vertices, vec![Node(0)]);
        assert_eq!(tour.length, 0);
    }

    #[test]
    fn two_vertices_use_both_directions() {
        let graph = MatrixGraph::from_weights(vec![0, 7, 7, 0], 2);
        let tour = solve(&graph);
        let expected: Vec<Node> = [0, 1].into_iter().map(Node).collect();
        assert_eq!(tour.vertices, expected);
        assert_eq!(tour.length, 14);
    }
}
