use std::fmt;

use crate::graph::Node;

/// A Hamiltonian cycle starting (and implicitly ending) at vertex 0.
///
/// `vertices` lists each vertex exactly once in visit order; `length` is the
/// total weight of the cycle including the closing edge back to vertex 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tour {
    pub vertices: Vec<Node>,
    pub length: i32,
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.length)?;
        for (position, vertex) in self.vertices.iter().enumerate() {
            if position > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", vertex.0)?;
        }
        Ok(())
    }
}
