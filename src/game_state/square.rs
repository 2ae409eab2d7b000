use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A single square on the chess board, addressed by row and column.
///
/// Row 0 is black's back rank (rank 8) and row 7 is white's back rank
/// (rank 1). Column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a new Square if both coordinates are on the board (0-7).
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Const constructor for coordinates known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the file ('a'-'h') of this square.
    pub const fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank (1-8) of this square.
    pub const fn rank(self) -> u8 {
        BOARD_SIZE - self.row
    }

    /// Returns the square `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, row 0 first, columns ascending within a row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

/// Error for coordinates that do not name a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square ({row}, {col}) is off the board")]
pub struct SquareError {
    pub row: u8,
    pub col: u8,
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError { row, col })
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use chess_core::game_state::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!((square.row(), square.col()), (4, 4));
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(SquareParseError::BadRank)?;

        Ok(Square {
            row: BOARD_SIZE - rank as u8,
            col: file as u8 - b'a',
        })
    }
}

/// Display square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    #[error("file must be a-h")]
    BadFile,
    #[error("rank must be 1-8")]
    BadRank,
}
