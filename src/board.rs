//! Board representation for the sliding-tile puzzle.
//!
//! A board is an immutable value: a flat row-major array of tile labels
//! where 0 marks the blank, plus the side length and the blank's flat
//! index. Applying a move never mutates a board; it produces a new one.
//! Equality and hashing go over the flat encoding, so two boards with the
//! same arrangement are indistinguishable regardless of how they were
//! built.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Smallest supported board side.
pub const MIN_SIDE: usize = 2;

/// Largest supported board side (labels must fit in a u8).
pub const MAX_SIDE: usize = 16;

/// Errors from [`Board::from_grid`]. All describe a malformed input grid;
/// re-supplying valid input always succeeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("board side must be between {MIN_SIDE} and {MAX_SIDE}, got {0}")]
    SideOutOfRange(usize),
    #[error("expected {expected} tiles for a {side}x{side} board, got {got}")]
    WrongTileCount {
        side: usize,
        expected: usize,
        got: usize,
    },
    #[error("tile labels must cover 0..{0} with each label appearing exactly once")]
    BadLabels(usize),
}

/// One puzzle configuration.
#[derive(Debug, Clone)]
pub struct Board {
    /// Row-major tile labels; 0 is the blank.
    tiles: Box<[u8]>,
    side: usize,
    /// Flat index of the blank, kept in sync with `tiles` so the search
    /// inner loop never rescans the grid for it.
    blank: usize,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // side and blank are both derived from the tile encoding
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Board {
    /// Builds a board from a row-major grid of labels.
    ///
    /// The grid must hold every label `0..side*side` exactly once; this
    /// covers duplicates, out-of-range labels, and a missing blank.
    pub fn from_grid(tiles: &[u8], side: usize) -> Result<Self, ConstructionError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(ConstructionError::SideOutOfRange(side));
        }
        let cells = side * side;
        if tiles.len() != cells {
            return Err(ConstructionError::WrongTileCount {
                side,
                expected: cells,
                got: tiles.len(),
            });
        }

        let mut seen = [false; MAX_SIDE * MAX_SIDE];
        for &label in tiles {
            let label = label as usize;
            if label >= cells || seen[label] {
                return Err(ConstructionError::BadLabels(cells));
            }
            seen[label] = true;
        }

        // every label 0..cells appears exactly once, so the blank exists
        let blank = tiles.iter().position(|&t| t == 0).unwrap();

        Ok(Self {
            tiles: tiles.into(),
            side,
            blank,
        })
    }

    /// The canonical solved board: labels `1..side*side` in row-major
    /// order with the blank in the last cell.
    pub fn goal(side: usize) -> Result<Self, ConstructionError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(ConstructionError::SideOutOfRange(side));
        }
        Ok(Self::goal_for_side(side))
    }

    /// Goal constructor for a side already known to be in range.
    pub(crate) fn goal_for_side(side: usize) -> Self {
        let cells = side * side;
        let mut tiles: Vec<u8> = (1..=(cells - 1) as u8).collect();
        tiles.push(0);
        Self {
            tiles: tiles.into(),
            side,
            blank: cells - 1,
        }
    }

    /// Board side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The flat row-major tile encoding; the canonical key for equality,
    /// hashing, and visited-set membership.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Coordinates of the blank as `(row, col)`.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// Successor board with the blank swapped into `target`.
    ///
    /// `target` must be a cell adjacent to the blank; only the move
    /// generator calls this.
    pub(crate) fn with_blank_at(&self, target: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Self {
            tiles,
            side: self.side,
            blank: target,
        }
    }
}

impl fmt::Display for Board {
    /// Renders the grid one row per line, the blank as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.side * self.side;
        let width = if cells <= 10 {
            1
        } else if cells <= 100 {
            2
        } else {
            3
        };

        for row in 0..self.side {
            for col in 0..self.side {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let label = self.tiles[row * self.side + col];
                if label == 0 {
                    write!(f, "{:>width$}", '.')?;
                } else {
                    write!(f, "{:>width$}", label)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_accepts_valid_2x2() {
        let board = Board::from_grid(&[0, 1, 2, 3], 2).unwrap();
        assert_eq!(board.side(), 2);
        assert_eq!(board.tiles(), &[0, 1, 2, 3]);
        assert_eq!(board.blank_position(), (0, 0));
    }

    #[test]
    fn test_from_grid_rejects_missing_blank() {
        assert_eq!(
            Board::from_grid(&[1, 2, 3, 4], 2),
            Err(ConstructionError::BadLabels(4))
        );
    }

    #[test]
    fn test_from_grid_rejects_duplicate_label() {
        assert_eq!(
            Board::from_grid(&[0, 1, 1, 3], 2),
            Err(ConstructionError::BadLabels(4))
        );
    }

    #[test]
    fn test_from_grid_rejects_out_of_range_label() {
        assert_eq!(
            Board::from_grid(&[0, 1, 2, 9], 2),
            Err(ConstructionError::BadLabels(4))
        );
    }

    #[test]
    fn test_from_grid_rejects_wrong_count() {
        assert_eq!(
            Board::from_grid(&[0, 1, 2], 2),
            Err(ConstructionError::WrongTileCount {
                side: 2,
                expected: 4,
                got: 3,
            })
        );
    }

    #[test]
    fn test_from_grid_rejects_bad_side() {
        assert_eq!(
            Board::from_grid(&[0], 1),
            Err(ConstructionError::SideOutOfRange(1))
        );
        assert_eq!(
            Board::from_grid(&[0; 17 * 17], 17),
            Err(ConstructionError::SideOutOfRange(17))
        );
    }

    #[test]
    fn test_goal_layout() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(goal.blank_position(), (2, 2));
    }

    #[test]
    fn test_goal_largest_side() {
        let goal = Board::goal(16).unwrap();
        assert_eq!(goal.tiles().len(), 256);
        assert_eq!(goal.tiles()[0], 1);
        assert_eq!(goal.tiles()[254], 255);
        assert_eq!(goal.blank_position(), (15, 15));
    }

    #[test]
    fn test_equality_ignores_construction_path() {
        let built = Board::from_grid(&[1, 2, 3, 4, 5, 6, 7, 8, 0], 3).unwrap();
        let goal = Board::goal(3).unwrap();
        assert_eq!(built, goal);

        let mut set = std::collections::HashSet::new();
        set.insert(goal);
        assert!(set.contains(&built));
    }

    #[test]
    fn test_display_marks_blank() {
        let board = Board::from_grid(&[1, 2, 3, 4, 5, 0, 7, 8, 6], 3).unwrap();
        assert_eq!(board.to_string(), "1 2 3\n4 5 .\n7 8 6\n");
    }

    #[test]
    fn test_display_pads_two_digit_labels() {
        let rendered = Board::goal(4).unwrap().to_string();
        assert_eq!(rendered.lines().next().unwrap(), " 1  2  3  4");
    }
}
