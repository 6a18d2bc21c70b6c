use std::fmt;

use crate::board::Board;
use crate::types::Dir;

/// A move that is not legal from the board's current blank position.
/// Reported, never silently ignored: applying it would corrupt the
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMove {
    pub mv: Dir,
    /// Blank (row, col) at the time of the request.
    pub blank: (u8, u8),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move {} is not legal with the blank at ({}, {})",
            self.mv, self.blank.0, self.blank.1
        )
    }
}

impl std::error::Error for IllegalMove {}

/// Apply a move as a pure transform: returns a new board on success.
/// The source tile (the blank's neighbor on the move's far side)
/// slides into the blank; the blank takes its cell.
pub fn apply_move(board: &Board, mv: Dir) -> Result<Board, IllegalMove> {
    match board.move_source(mv) {
        Some(src) => {
            let mut next = board.clone();
            next.swap_blank_with(src);
            Ok(next)
        }
        None => Err(IllegalMove {
            mv,
            blank: board.blank_pos(),
        }),
    }
}

/// Expand a board into its one-move children, emitted in `Dir::all()`
/// order. A corner blank yields 2, an edge blank 3, an interior blank
/// 4.
pub fn successors(board: &Board) -> Vec<(Dir, Board)> {
    let mut out = Vec::with_capacity(4);
    for mv in Dir::all() {
        if let Some(src) = board.move_source(mv) {
            let mut next = board.clone();
            next.swap_blank_with(src);
            out.push((mv, next));
        }
    }
    out
}
