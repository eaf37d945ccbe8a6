/*!
Foundation types shared by the littletsp solver crates: edge costs with an
absorbing infinity, graph views over integer weight matrices, and tours.
 */

pub mod edge_cost;
pub mod graph;
pub mod matrix;
pub mod tour;
