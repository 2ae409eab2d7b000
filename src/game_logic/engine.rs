use std::ops::Deref;

use super::checks::{Check, CheckReport};
use super::movegen;
use crate::game_state::{BOARD_SIZE, GameState, Move, MoveError, Piece, PieceKind, Square};

/// Temporarily relocates a king to test whether it would be safe there.
///
/// The board and the king cache are moved on construction and put back when
/// the probe is dropped, whatever happens in between.
struct KingProbe<'a> {
    state: &'a mut GameState,
    king: Piece,
    from: Square,
    to: Square,
    displaced: Option<Piece>,
}

impl<'a> KingProbe<'a> {
    fn new(state: &'a mut GameState, king: Piece, from: Square, to: Square) -> Self {
        state.board.set(from, None);
        let displaced = state.board.take(to);
        state.board.set(to, Some(king));
        state.set_king_square(king.color, to);
        Self {
            state,
            king,
            from,
            to,
            displaced,
        }
    }
}

impl Deref for KingProbe<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl Drop for KingProbe<'_> {
    fn drop(&mut self) {
        self.state.board.set(self.to, self.displaced);
        self.state.board.set(self.from, Some(self.king));
        self.state.set_king_square(self.king.color, self.from);
    }
}

impl GameState {
    /// All legal moves for the side to move, in row-major order of the
    /// moving piece.
    ///
    /// An empty result while [`in_check`](Self::in_check) is true is
    /// checkmate; empty while not in check is stalemate. No other terminal
    /// state is reported.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let report = self.scan_pins_and_checks();
        let king = self.king_square(self.turn);

        let moves = match report.checks.as_slice() {
            [] => self.pseudo_legal_moves(&report),
            [check] => {
                let targets = self.interposing_squares(king, check);
                let mut moves = self.pseudo_legal_moves(&report);
                moves.retain(|mv| mv.piece_moved.kind == PieceKind::King || targets.contains(&mv.end));
                moves
            }
            // Double check: only the king can answer.
            _ => {
                let mut moves = Vec::new();
                if let Some(piece) = self.board[king] {
                    self.piece_moves(piece, king, &report, &mut moves);
                }
                moves
            }
        };

        log::trace!("{} legal moves for {:?}", moves.len(), self.turn);
        moves
    }

    /// Moves that are geometrically valid for each piece and respect pins.
    ///
    /// King moves are already filtered for safety; other moves may still
    /// ignore an existing check.
    pub fn generate_pseudo_legal_moves(&mut self) -> Vec<Move> {
        let report = self.scan_pins_and_checks();
        self.pseudo_legal_moves(&report)
    }

    /// Plays `mv` if it is legal.
    ///
    /// `mv` is matched by its squares, so one built with
    /// [`Move::from_board`] from user input works. Returns the move as
    /// generated from the current board.
    pub fn try_make_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        let Some(legal) = self.get_valid_moves().into_iter().find(|m| *m == mv) else {
            log::debug!("rejected illegal move {mv}");
            return Err(MoveError::Illegal(mv));
        };
        self.make_move(legal);
        Ok(legal)
    }

    fn pseudo_legal_moves(&mut self, report: &CheckReport) -> Vec<Move> {
        let mut moves = Vec::new();
        for square in Square::all() {
            let Some(piece) = self.board[square] else {
                continue;
            };
            if piece.color == self.turn {
                self.piece_moves(piece, square, report, &mut moves);
            }
        }
        moves
    }

    fn piece_moves(
        &mut self,
        piece: Piece,
        from: Square,
        report: &CheckReport,
        moves: &mut Vec<Move>,
    ) {
        let first = moves.len();
        movegen::generate(piece, from, &self.board, report.pin_on(from), moves);

        if piece.kind == PieceKind::King {
            for mv in moves.split_off(first) {
                if self.king_safe_after(&mv) {
                    moves.push(mv);
                }
            }
        }
    }

    fn king_safe_after(&mut self, mv: &Move) -> bool {
        let probe = KingProbe::new(self, mv.piece_moved, mv.start, mv.end);
        !probe.in_check()
    }

    /// Squares a non-king move may land on to answer a single check.
    fn interposing_squares(&self, king: Square, check: &Check) -> Vec<Square> {
        let checker = self.board[check.square];
        if checker.is_some_and(|piece| piece.kind == PieceKind::Knight) {
            return vec![check.square];
        }

        let mut squares = Vec::new();
        for distance in 1..BOARD_SIZE as i8 {
            let Some(square) = check.direction.step(king, distance) else {
                break;
            };
            squares.push(square);
            if square == check.square {
                break;
            }
        }
        squares
    }
}
