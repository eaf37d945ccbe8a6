/*!
This crate provides solvers for the symmetric Traveling Salesperson Problem on
small, dense, integer-weighted graphs:

- [`little`]: an exact branch-and-bound solver after Little, Murty, Sweeney
  and Karel.
- [`naive`]: an exhaustive enumerator, useful as a correctness oracle.
- [`fast`]: a cheapest-insertion heuristic producing feasible (not necessarily
  optimal) tours, suitable as an initial upper bound for the exact solver.
 */

pub mod fast;
pub mod little;
pub mod naive;
