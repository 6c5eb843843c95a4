//! Breadth-first search over board configurations.
//!
//! The frontier is a FIFO queue of indices into an arena of search nodes;
//! each node records the move that produced it and its parent, so the
//! solution is reconstructed by walking parent links back from the goal
//! node. An FxHashSet keyed on the board's flat encoding deduplicates
//! states, so each distinct configuration is expanded at most once and the
//! first time the goal is dequeued the path to it is minimal.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::board::Board;
use crate::moves::{Move, ALL_MOVES};
use crate::solvability::is_solvable;

/// Terminal outcomes of a search that found no solution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The parity check proved no path to the goal exists. Returned
    /// before any node is expanded.
    #[error("puzzle is not solvable")]
    Unsolvable,
    /// The node budget ran out, or (defensively) the frontier emptied,
    /// before the goal was found. Giving up, not impossibility.
    #[error("search gave up before reaching the goal")]
    Exhausted,
}

/// A frontier entry: a board plus the move and parent that produced it.
/// The root node carries neither.
struct SearchNode {
    board: Board,
    parent: Option<(usize, Move)>,
}

/// Finds a shortest move sequence taking `initial` to the goal.
///
/// Returns an empty sequence when `initial` already is the goal.
pub fn solve(initial: &Board) -> Result<Vec<Move>, SolveError> {
    solve_with_limit(initial, None)
}

/// Like [`solve`], but gives up with [`SolveError::Exhausted`] once
/// `max_nodes` nodes have been expanded.
///
/// The solvability check still runs first, so an unsolvable board reports
/// [`SolveError::Unsolvable`] regardless of the budget.
pub fn solve_with_limit(
    initial: &Board,
    max_nodes: Option<usize>,
) -> Result<Vec<Move>, SolveError> {
    if !is_solvable(initial) {
        return Err(SolveError::Unsolvable);
    }

    let goal = Board::goal_for_side(initial.side());

    let mut nodes = vec![SearchNode {
        board: initial.clone(),
        parent: None,
    }];
    let mut frontier = VecDeque::from([0usize]);
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    visited.insert(initial.clone());
    let mut expanded = 0usize;

    while let Some(index) = frontier.pop_front() {
        if nodes[index].board == goal {
            return Ok(reconstruct_path(&nodes, index));
        }

        if let Some(limit) = max_nodes {
            if expanded >= limit {
                return Err(SolveError::Exhausted);
            }
        }
        expanded += 1;

        for mv in ALL_MOVES {
            // apply returns None exactly for the out-of-bounds directions,
            // so this walks legal_moves(board) in enumeration order
            let Some(successor) = nodes[index].board.apply(mv) else {
                continue;
            };
            if visited.contains(&successor) {
                continue;
            }
            visited.insert(successor.clone());
            nodes.push(SearchNode {
                board: successor,
                parent: Some((index, mv)),
            });
            frontier.push_back(nodes.len() - 1);
        }
    }

    // unreachable once the solvability check passed: the goal lies in the
    // connected component the search enumerates
    Err(SolveError::Exhausted)
}

/// Walks parent links from the goal node back to the root, then reverses
/// the collected moves.
fn reconstruct_path(nodes: &[SearchNode], mut index: usize) -> Vec<Move> {
    let mut path = Vec::new();
    while let Some((parent, mv)) = nodes[index].parent {
        path.push(mv);
        index = parent;
    }
    path.reverse();
    path
}
