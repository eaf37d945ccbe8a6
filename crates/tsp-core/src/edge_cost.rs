use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Cost of an edge in a reduced cost matrix.
///
/// Excluded cells are represented as [`EdgeCost::Infinite`], which absorbs
/// addition and orders strictly above every finite cost. This keeps forbidden
/// edges from ever being selected as a row or column minimum during matrix
/// reduction.
///
/// Subtracting an infinite cost from a finite one has no meaning in the
/// reduction arithmetic and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeCost {
    // Variant order matters: the derived ordering places every finite cost
    // below `Infinite`.
    Finite(i32),
    Infinite,
}

impl EdgeCost {
    pub const ZERO: EdgeCost = EdgeCost::Finite(0);

    /// The stored value, or `i32::MAX` as a sentinel when infinite.
    pub fn value(self) -> i32 {
        match self {
            EdgeCost::Finite(value) => value,
            EdgeCost::Infinite => i32::MAX,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, EdgeCost::Infinite)
    }
}

impl Add for EdgeCost {
    type Output = EdgeCost;

    fn add(self, other: EdgeCost) -> EdgeCost {
        match (self, other) {
            (EdgeCost::Finite(a), EdgeCost::Finite(b)) => EdgeCost::Finite(a + b),
            _ => EdgeCost::Infinite,
        }
    }
}

impl AddAssign for EdgeCost {
    fn add_assign(&mut self, other: EdgeCost) {
        *self = *self + other;
    }
}

impl Sub for EdgeCost {
    type Output = EdgeCost;

    fn sub(self, other: EdgeCost) -> EdgeCost {
        match (self, other) {
            (EdgeCost::Finite(a), EdgeCost::Finite(b)) => EdgeCost::Finite(a - b),
            (EdgeCost::Infinite, _) => EdgeCost::Infinite,
            (EdgeCost::Finite(_), EdgeCost::Infinite) => {
                panic!("cannot subtract an infinite edge cost from a finite one")
            }
        }
    }
}

impl SubAssign for EdgeCost {
    fn sub_assign(&mut self, other: EdgeCost) {
        *self = *self - other;
    }
}
