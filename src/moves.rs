//! Move generation: which directions the blank may travel, and the
//! successor board produced by sliding the neighboring tile into it.

use std::fmt;

use crate::board::Board;

/// A direction the blank travels. Equivalently, the neighboring tile on
/// that side slides into the blank's former cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed enumeration order. The search expands successors in this order,
/// which pins down which of several equal-length solutions is returned.
pub const ALL_MOVES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

impl Move {
    /// Row and column delta applied to the blank.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    /// Lowercase direction token, the external reporting form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(token)
    }
}

impl Board {
    /// The moves that keep the blank in bounds, in [`ALL_MOVES`] order.
    pub fn legal_moves(&self) -> Vec<Move> {
        ALL_MOVES
            .iter()
            .copied()
            .filter(|&mv| self.blank_target(mv).is_some())
            .collect()
    }

    /// Applies a move, returning the successor board.
    ///
    /// Returns `None` if the move would take the blank out of bounds;
    /// moves produced by [`Board::legal_moves`] always succeed.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        self.blank_target(mv)
            .map(|target| self.with_blank_at(target))
    }

    /// Flat index the blank would land on, or `None` when out of bounds.
    fn blank_target(&self, mv: Move) -> Option<usize> {
        let (row, col) = self.blank_position();
        let (drow, dcol) = mv.offset();
        let row = row.checked_add_signed(drow)?;
        let col = col.checked_add_signed(dcol)?;
        if row < self.side() && col < self.side() {
            Some(row * self.side() + col)
        } else {
            None
        }
    }
}
