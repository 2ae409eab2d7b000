use std::fmt;
use std::ops::Index;

use super::piece::{Color, Piece, PieceKind};
use super::square::{BOARD_SIZE, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of squares. The single source of truth for occupancy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting position, black on rows 0-1 and white on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, kind));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Empties the square, returning what was on it.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Read-only view of the rows, row 0 (rank 8) first.
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        &self.cells
    }

    /// All occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Location of the first king of `color`, scanning row-major.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .find_map(|(sq, piece)| (piece == king).then_some(sq))
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.row() as usize][square.col() as usize]
    }
}

/// Text diagram with rank 8 at the top, e.g. for log output.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', Piece::char))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square is invalid")
    }

    #[test_case("e1", Color::White, PieceKind::King)]
    #[test_case("d1", Color::White, PieceKind::Queen)]
    #[test_case("e8", Color::Black, PieceKind::King)]
    #[test_case("b8", Color::Black, PieceKind::Knight)]
    #[test_case("a2", Color::White, PieceKind::Pawn)]
    #[test_case("h7", Color::Black, PieceKind::Pawn)]
    fn test_standard_setup(square: &str, color: Color, kind: PieceKind) {
        assert_eq!(Board::standard()[sq(square)], Some(Piece::new(color, kind)));
    }

    #[test]
    fn test_standard_middle_is_empty() {
        let board = Board::standard();
        assert_eq!(board.occupied().count(), 32);
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.get(Square::new(row, col).unwrap()), None);
            }
        }
    }

    #[test]
    fn test_king_square() {
        let board = Board::standard();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_set_and_take() {
        let mut board = Board::empty();
        let knight = Piece::new(Color::White, PieceKind::Knight);

        board.set(sq("f3"), Some(knight));
        assert_eq!(board[sq("f3")], Some(knight));

        assert_eq!(board.take(sq("f3")), Some(knight));
        assert_eq!(board[sq("f3")], None);
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
