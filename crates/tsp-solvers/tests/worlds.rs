//! Runs every solver over the world fixtures and cross-checks the results.

use tsp_core::edge_cost::EdgeCost;
use tsp_core::graph::{Graph, Node};
use tsp_core::tour::Tour;
use tsp_solvers::{fast, little, naive};

/// Largest vertex count the exhaustive oracle is asked to confirm.
const NAIVE_ORACLE_LIMIT: usize = 9;

fn assert_valid_tour<G: Graph>(graph: &G, tour: &Tour) {
    assert_eq!(tour.vertices.len(), graph.num_vertices());
    assert_eq!(tour.vertices.first(), Some(&Node(0)));

    let mut seen = vec![false; graph.num_vertices()];
    for &vertex in &tour.vertices {
        assert!(!seen[vertex.0], "vertex {} visited twice", vertex.0);
        seen[vertex.0] = true;
    }

    let mut length = 0;
    for index in 0..tour.vertices.len() {
        length += graph.weight(
            tour.vertices[index],
            tour.vertices[(index + 1) % tour.vertices.len()],
        );
    }
    assert_eq!(tour.length, length, "tour length does not match its edges");
}

fn check_solvers_agree(path: &str) {
    let graph = tsp_parser::parse_world_file(path).unwrap();

    let optimal = little::solve(&graph);
    assert_valid_tour(&graph, &optimal);

    let heuristic = fast::solve(&graph);
    assert_valid_tour(&graph, &heuristic);
    assert!(
        optimal.length <= heuristic.length,
        "exact length {} exceeds heuristic length {}",
        optimal.length,
        heuristic.length
    );

    // re-solving must reproduce the exact same tour
    assert_eq!(little::solve(&graph), optimal);

    // seeding the search with the heuristic bound keeps the optimum reachable
    let bounded = little::solve_with_upper_bound(&graph, EdgeCost::Finite(heuristic.length + 1));
    assert_valid_tour(&graph, &bounded);
    assert_eq!(bounded.length, optimal.length);

    if graph.num_vertices() <= NAIVE_ORACLE_LIMIT {
        let oracle = naive::solve(&graph);
        assert_valid_tour(&graph, &oracle);
        assert_eq!(oracle.length, optimal.length);
    }
}

tsp_macros::test_fn_on_all_worlds!(check_solvers_agree, solvers_agree);
