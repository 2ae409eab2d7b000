mod board;
mod chess_move;
mod fen;
mod piece;
mod square;

pub use board::Board;
pub use chess_move::{Move, MoveError};
pub use fen::FenError;
pub use piece::{Color, Piece, PieceKind};
pub use square::{BOARD_SIZE, Square, SquareError, SquareParseError};

const WHITE_KING_START: Square = Square::at(7, 4);
const BLACK_KING_START: Square = Square::at(0, 4);

/// Authoritative state of one game: board, side to move, move history and
/// the cached king squares.
///
/// The king squares are derived from the board and kept in lockstep with it
/// by [`make_move`](Self::make_move) and [`undo_move`](Self::undo_move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) move_log: Vec<Move>,
    pub(crate) king_squares: [Square; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_parts(
            Board::standard(),
            Color::White,
            WHITE_KING_START,
            BLACK_KING_START,
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        turn: Color,
        white_king: Square,
        black_king: Square,
    ) -> Self {
        Self {
            board,
            turn,
            move_log: Vec::new(),
            king_squares: [white_king, black_king],
        }
    }

    /// Read-only view of the board for rendering.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.turn == Color::White
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Cached location of `color`'s king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        self.king_squares[color.index()] = square;
    }

    /// Plays `mv` without checking that it is legal.
    ///
    /// Callers must take moves from [`get_valid_moves`](Self::get_valid_moves)
    /// or use [`try_make_move`](Self::try_make_move). Castling, promotion and
    /// en passant are not supported: a pawn reaching the last rank stays a pawn.
    pub fn make_move(&mut self, mv: Move) {
        self.board.set(mv.start, None);
        self.board.set(mv.end, Some(mv.piece_moved));
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.end);
        }
        self.move_log.push(mv);
        self.turn = self.turn.opposite();
        log::debug!("played {mv}");
    }

    /// Takes back the last move. Does nothing when no move has been played.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        self.board.set(mv.start, Some(mv.piece_moved));
        self.board.set(mv.end, mv.piece_captured);
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.start);
        }
        self.turn = self.turn.opposite();
        log::debug!("undid {mv}");
    }
}
