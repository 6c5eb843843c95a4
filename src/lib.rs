//! Sliding-Tile Puzzle Solver Library
//!
//! Finds minimum-length move sequences for the N x N sliding-tile puzzle
//! (8-puzzle, 15-puzzle, and so on) by breadth-first search over board
//! configurations. A permutation-parity solvability check rejects
//! impossible boards before any search runs.

pub mod board;
pub mod moves;
pub mod scramble;
pub mod solvability;
pub mod solver;

pub use board::{Board, ConstructionError};
pub use moves::Move;
pub use scramble::{scramble, scramble_seeded};
pub use solvability::is_solvable;
pub use solver::{solve, solve_with_limit, SolveError};
