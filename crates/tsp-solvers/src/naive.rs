/*!
Exhaustive TSP enumeration. Visits every permutation of the vertices, so it
is only usable on very small graphs, but its simplicity makes it a trusted
oracle for the other solvers.
 */

use tsp_core::graph::{Graph, Node};
use tsp_core::tour::Tour;

/// Solves the TSP by enumerating every tour starting at vertex 0.
pub fn solve<G: Graph>(graph: &G) -> Tour {
    if graph.num_vertices() == 0 {
        return Tour::default();
    }

    let mut visited = vec![false; graph.num_vertices()];
    visited[0] = true;
    let mut current = Tour {
        vertices: vec![Node(0)],
        length: 0,
    };
    let mut best = Tour {
        vertices: Vec::new(),
        length: i32::MAX,
    };
    extend_tour(graph, &mut current, &mut visited, &mut best);
    best
}

fn extend_tour<G: Graph>(graph: &G, current: &mut Tour, visited: &mut [bool], best: &mut Tour) {
    let last = *current
        .vertices
        .last()
        .expect("partial tours always contain the start vertex");

    // every vertex placed: close the cycle back to the start
    if current.vertices.len() == visited.len() {
        let length = current.length + graph.weight(last, Node(0));
        if length < best.length {
            *best = Tour {
                vertices: current.vertices.clone(),
                length,
            };
        }
        return;
    }

    for index in 0..visited.len() {
        if visited[index] {
            continue;
        }
        let next = Node(index);
        let step = graph.weight(last, next);

        visited[index] = true;
        current.vertices.push(next);
        current.length += step;

        extend_tour(graph, current, visited, best);

        current.length -= step;
        current.vertices.pop();
        visited[index] = false;
    }
}
