//! Solvability check via permutation parity.
//!
//! Every move swaps the blank with one tile, so reachability from the
//! goal constrains the parity of the tile permutation together with the
//! blank's row. For odd sides a board is solvable iff its inversion count
//! is even; for even sides, iff the inversion count plus the blank's row
//! index (from the top, zero-based) is odd.

use crate::board::Board;

/// Whether `board` can reach the canonical goal.
///
/// Runs once per solve, before any search, so a provably unreachable goal
/// never costs more than this scan.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());
    if board.side() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (blank_row, _) = board.blank_position();
        (inversions + blank_row) % 2 == 1
    }
}

/// Counts pairs of tiles that appear in the opposite order to the goal,
/// ignoring the blank.
fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&later| later != 0 && later < tile)
                .count()
        })
        .sum()
}
