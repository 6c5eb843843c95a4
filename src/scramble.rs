//! Random solvable board generation.
//!
//! Shuffles the tile labels and rejection-samples against the parity
//! check. Exactly half of all permutations are solvable, so this takes
//! two shuffles on average.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, ConstructionError};
use crate::solvability::is_solvable;

/// Produces a uniformly random solvable board of the given side.
pub fn scramble<R: Rng>(side: usize, rng: &mut R) -> Result<Board, ConstructionError> {
    let mut tiles = Board::goal(side)?.tiles().to_vec();
    loop {
        tiles.shuffle(rng);
        // the shuffle permutes a valid label set, so from_grid cannot fail
        let board = Board::from_grid(&tiles, side)?;
        if is_solvable(&board) {
            return Ok(board);
        }
    }
}

/// [`scramble`] with a fixed seed, for reproducible boards.
pub fn scramble_seeded(side: usize, seed: u64) -> Result<Board, ConstructionError> {
    scramble(side, &mut StdRng::seed_from_u64(seed))
}
