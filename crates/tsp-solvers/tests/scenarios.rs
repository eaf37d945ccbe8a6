//! Concrete expected optima for small worlds, plus label-invariance.

use tsp_core::graph::Node;
use tsp_core::graph::manhattan::{ManhattanGraph, Point};
use tsp_solvers::little;

#[test]
fn single_point_world() {
    let graph = tsp_parser::parse_world_file("../../worlds/single.txt").unwrap();
    let tour = little::solve(&graph);
    assert_eq!(tour.vertices, vec![Node(0)]);
    assert_eq!(tour.length, 0);
}

#[test]
fn triangle_world_optimum_is_4() {
    let graph = tsp_parser::parse_world_file("../../worlds/triangle.txt").unwrap();
    assert_eq!(little::solve(&graph).length, 4);
}

#[test]
fn square_world_optimum_is_8() {
    let graph = tsp_parser::parse_world_file("../../worlds/square.txt").unwrap();
    let tour = little::solve(&graph);
    assert_eq!(tour.length, 8);
}

#[test]
fn cross_world_optimum_is_8() {
    let graph = tsp_parser::parse_world_file("../../worlds/cross.txt").unwrap();
    let tour = little::solve(&graph);
    assert_eq!(tour.length, 8);
    assert_eq!(tour.vertices.len(), 5);
}

#[test]
fn relabeling_vertices_preserves_the_optimal_length() {
    let points = [
        Point { x: 0, y: 0 },
        Point { x: 1, y: 0 },
        Point { x: 2, y: 0 },
        Point { x: 1, y: 1 },
        Point { x: 1, y: -1 },
    ];
    let graph = ManhattanGraph::new(10, &points);

    let mut shuffled = points;
    shuffled.swap(0, 3);
    shuffled.swap(1, 4);
    let relabeled = ManhattanGraph::new(10, &shuffled);

    // the visit order may differ under the new labels, but not the length
    assert_eq!(
        little::solve(&graph).length,
        little::solve(&relabeled).length
    );
}
