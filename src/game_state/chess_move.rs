use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use super::board::Board;
use super::piece::Piece;
use super::square::Square;

/// One ply: where a piece went, and what it captured.
///
/// The pieces are a snapshot taken at construction; a `Move` holds no
/// reference to the board. Equality and hashing only look at the start and
/// end squares, so a move built from user input compares equal to the
/// generator's move between the same squares.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
}

/// Errors from building or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0} to move")]
    EmptySquare(Square),
    #[error("{0} is not a legal move")]
    Illegal(Move),
}

impl Move {
    pub const fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
        }
    }

    /// Snapshots the pieces on `start` and `end` of the given board.
    pub fn from_board(start: Square, end: Square, board: &Board) -> Result<Self, MoveError> {
        let piece_moved = board.get(start).ok_or(MoveError::EmptySquare(start))?;
        Ok(Self::new(start, end, piece_moved, board.get(end)))
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Start and end squares concatenated, e.g. "e2e4".
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
