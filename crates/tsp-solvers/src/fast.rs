/*!
Cheapest-insertion TSP heuristic. Grows the tour from vertex 0 by repeatedly
taking the unvisited vertex nearest to any tour vertex and splicing it into
the position that increases the tour length the least. The result is feasible
but not necessarily optimal; the exact solver can use its length as an
initial upper bound.
 */

use log::debug;
use tsp_core::graph::{Graph, Node};
use tsp_core::tour::Tour;

/// Builds a feasible tour by cheapest insertion.
pub fn solve<G: Graph>(graph: &G) -> Tour {
    let num_vertices = graph.num_vertices();
    if num_vertices == 0 {
        return Tour::default();
    }

    let start = Node(0);
    let mut vertices = vec![start];

    // distance from each unvisited vertex to its nearest tour vertex
    let mut distances = vec![0; num_vertices];
    let mut remaining: Vec<Node> = (1..num_vertices).map(Node).collect();
    for &vertex in &remaining {
        distances[vertex.0] = graph.weight(start, vertex);
    }

    // the second vertex is simply the nearest to the start
    if let Some(position) = nearest_position(&remaining, &distances) {
        let second = remaining.remove(position);
        vertices.push(second);
    }

    while !remaining.is_empty() {
        let position =
            nearest_position(&remaining, &distances).expect("remaining set is non-empty");
        let next = remaining.remove(position);

        // splice `next` between the adjacent pair it stretches the least
        let mut insert_after = 0;
        let mut min_cost = insertion_cost(graph, vertices[0], vertices[1], next);
        for index in 1..vertices.len() - 1 {
            let cost = insertion_cost(graph, vertices[index], vertices[index + 1], next);
            if cost < min_cost {
                min_cost = cost;
                insert_after = index;
            }
        }
        vertices.insert(insert_after + 1, next);

        for &vertex in &remaining {
            let updated = graph.weight(next, vertex);
            if updated < distances[vertex.0] {
                distances[vertex.0] = updated;
            }
        }
    }

    let mut length = 0;
    for index in 0..vertices.len() {
        length += graph.weight(vertices[index], vertices[(index + 1) % vertices.len()]);
    }
    debug!("cheapest insertion found a tour of length {length}");

    Tour { vertices, length }
}

/// Position in `remaining` of the vertex nearest to the tour; earlier
/// positions win ties.
fn nearest_position(remaining: &[Node], distances: &[i32]) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .min_by_key(|&(_, vertex)| distances[vertex.0])
        .map(|(position, _)| position)
}

fn insertion_cost<G: Graph>(graph: &G, before: Node, after: Node, inserted: Node) -> i32 {
    graph.weight(before, inserted) + graph.weight(after, inserted) - graph.weight(before, after)
}

#[cfg(test)]
mod tests {
    use tsp_core::graph::manhattan::{ManhattanGraph, Point};
    use tsp_core::graph::matrix::MatrixGraph;

    use super::*;

    #[test]
    fn produces_a_feasible_tour() {
        let points = [
            Point { x: 0, y: 0 },
            Point { x: 3, y: 0 },
            Point { x: 3, y: 3 },
            Point { x: 0, y: 3 },
            Point { x: 1, y: 1 },
        ];
        let graph = ManhattanGraph::new(10, &points);
        let tour = solve(&graph);

        assert_eq!(tour.vertices.len(), 5);
        assert_eq!(tour.vertices[0], Node(0));
        let mut sorted: Vec<usize> = tour.vertices.iter().map(|vertex| vertex.0).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4]);

        let mut length = 0;
        for index in 0..tour.vertices.len() {
            length += graph.weight(
                tour.vertices[index],
                tour.vertices[(index + 1) % tour.vertices.len()],
            );
        }
        assert_eq!(tour.length, length);
    }

    #[test]
    fn two_vertices_go_out_and_back() {
        let graph = MatrixGraph::from_weights(vec![0, 3, 3, 0], 2);
        let tour = solve(&graph);
        assert_eq!(tour.vertices, vec![Node(0), Node(1)]);
        assert_eq!(tour.length, 6);
    }

    #[test]
    fn degenerate_sizes() {
        let empty = solve(&MatrixGraph::from_weights(Vec::new(), 0));
        assert!(empty.vertices.is_empty());

        let single = solve(&MatrixGraph::from_weights(vec![0], 1));
        assert_eq!(single.vertices, vec![Node(0)]);
        assert_eq!(single.length, 0);
    }
}
