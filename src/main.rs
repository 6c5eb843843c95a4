//! Sliding-Tile Puzzle Solver
//!
//! Solves N x N sliding-tile puzzles (8-puzzle, 15-puzzle) from the
//! command line: finds a shortest move sequence to the canonical goal,
//! checks solvability without searching, and generates random solvable
//! boards to practice on.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use npuzzle::{is_solvable, scramble, scramble_seeded, solve_with_limit, Board, Move, SolveError};

/// Solves sliding-tile puzzles and generates scrambled boards.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a shortest solution for a board given as row-major tile
    /// labels, 0 marking the blank.
    Solve {
        /// Tile labels in row-major order, e.g. 1 2 3 4 5 0 7 8 6
        #[arg(required = true)]
        tiles: Vec<u8>,
        /// Board side length; inferred from the tile count when omitted.
        #[arg(long)]
        size: Option<usize>,
        /// Give up after expanding this many search nodes.
        #[arg(long)]
        max_nodes: Option<usize>,
    },
    /// Report whether a board is solvable, without searching.
    Check {
        /// Tile labels in row-major order.
        #[arg(required = true)]
        tiles: Vec<u8>,
        /// Board side length; inferred from the tile count when omitted.
        #[arg(long)]
        size: Option<usize>,
    },
    /// Generate a random solvable board.
    Scramble {
        /// Board side length.
        #[arg(long, default_value_t = 3)]
        size: usize,
        /// Seed for a reproducible board.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            tiles,
            size,
            max_nodes,
        } => run_solve(&tiles, size, max_nodes),
        Command::Check { tiles, size } => run_check(&tiles, size),
        Command::Scramble { size, seed } => run_scramble(size, seed),
    }
}

/// Solves the board and prints it with the move sequence.
fn run_solve(tiles: &[u8], size: Option<usize>, max_nodes: Option<usize>) -> Result<()> {
    let board = parse_board(tiles, size)?;
    match solve_with_limit(&board, max_nodes) {
        Ok(moves) => {
            print!("{}", solve_report(&board, &moves));
            Ok(())
        }
        Err(SolveError::Unsolvable) => {
            print!("{board}");
            bail!("puzzle is not solvable")
        }
        Err(err) => bail!(err),
    }
}

/// Prints the solvability verdict for the board.
fn run_check(tiles: &[u8], size: Option<usize>) -> Result<()> {
    let board = parse_board(tiles, size)?;
    if is_solvable(&board) {
        println!("solvable");
    } else {
        println!("not solvable");
    }
    Ok(())
}

/// Generates and prints a random solvable board.
fn run_scramble(size: usize, seed: Option<u64>) -> Result<()> {
    let board = match seed {
        Some(seed) => scramble_seeded(size, seed),
        None => scramble(size, &mut rand::thread_rng()),
    }
    .context("failed to generate a board")?;
    print!("{board}");
    Ok(())
}

/// Builds a board from CLI tile arguments, inferring the side length from
/// the tile count unless one was given.
fn parse_board(tiles: &[u8], size: Option<usize>) -> Result<Board> {
    let side = match size {
        Some(side) => side,
        None => infer_side(tiles.len())
            .with_context(|| format!("{} tiles do not form a square board", tiles.len()))?,
    };
    Board::from_grid(tiles, side).context("invalid board")
}

/// The side length whose square is `count`, if one exists.
fn infer_side(count: usize) -> Option<usize> {
    let side = (count as f64).sqrt().round() as usize;
    (side * side == count).then_some(side)
}

/// Formats the solved board and its move sequence for display.
fn solve_report(board: &Board, moves: &[Move]) -> String {
    let mut out = board.to_string();
    if moves.is_empty() {
        out.push_str("already solved\n");
    } else {
        let tokens: Vec<String> = moves.iter().map(Move::to_string).collect();
        out.push_str(&format!(
            "solved in {} move(s): {}\n",
            moves.len(),
            tokens.join(" ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use npuzzle::solve;

    #[test]
    fn test_infer_side() {
        assert_eq!(infer_side(4), Some(2));
        assert_eq!(infer_side(9), Some(3));
        assert_eq!(infer_side(16), Some(4));
        assert_eq!(infer_side(8), None);
        assert_eq!(infer_side(10), None);
    }

    #[test]
    fn test_parse_board_infers_side() {
        let board = parse_board(&[1, 2, 3, 4, 5, 0, 7, 8, 6], None).unwrap();
        assert_eq!(board.side(), 3);
    }

    #[test]
    fn test_parse_board_rejects_non_square_count() {
        assert!(parse_board(&[1, 2, 0], None).is_err());
    }

    #[test]
    fn test_solve_report_snapshot() {
        let board = Board::from_grid(&[1, 2, 3, 4, 5, 0, 7, 8, 6], 3).unwrap();
        let moves = solve(&board).unwrap();

        insta::assert_snapshot!(solve_report(&board, &moves), @r"
        1 2 3
        4 5 .
        7 8 6
        solved in 1 move(s): down
        ");
    }

    #[test]
    fn test_solve_report_snapshot_scrambled() {
        let board = Board::from_grid(&[1, 2, 3, 4, 8, 5, 7, 0, 6], 3).unwrap();
        let moves = solve(&board).unwrap();

        insta::assert_snapshot!(solve_report(&board, &moves), @r"
        1 2 3
        4 8 5
        7 . 6
        solved in 3 move(s): up right down
        ");
    }

    #[test]
    fn test_solve_report_for_solved_board() {
        let goal = Board::goal(3).unwrap();
        insta::assert_snapshot!(solve_report(&goal, &[]), @r"
        1 2 3
        4 5 6
        7 8 .
        already solved
        ");
    }
}
