//! Position setup from Forsyth-Edwards Notation.
//!
//! Only piece placement and side to move are meaningful to the engine.
//! Castling, en passant and move clock fields are accepted and ignored.

use thiserror::Error;

use super::GameState;
use super::board::Board;
use super::piece::{Color, Piece, PieceKind};
use super::square::{BOARD_SIZE, Square};

/// Error when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN has no piece placement field")]
    Empty,
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },
    #[error("invalid piece letter '{0}'")]
    BadPiece(char),
    #[error("invalid side to move '{0}'")]
    BadTurn(String),
    #[error("expected exactly one {color:?} king, found {count}")]
    KingCount { color: Color, count: usize },
}

impl GameState {
    /// Builds a game from a FEN string, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;
        let board = parse_placement(placement)?;

        let turn = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::BadTurn(other.to_string())),
        };

        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;
        Ok(Self::from_parts(board, turn, white_king, black_king))
    }

    /// Piece placement and side to move, with no castling or en passant rights.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for (row, cells) in self.board.rows().iter().enumerate() {
            if row > 0 {
                placement.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
        }
        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{placement} {turn} - - 0 1")
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.into_iter().enumerate() {
        let rank_number = BOARD_SIZE - row as u8;
        let mut col: u8 = 0;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col = col.saturating_add(skip as u8);
                continue;
            }
            let piece = Piece::from_char(ch).ok_or(FenError::BadPiece(ch))?;
            let square = Square::new(row as u8, col).ok_or(FenError::RankWidth {
                rank: rank_number,
            })?;
            board.set(square, Some(piece));
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(FenError::RankWidth { rank: rank_number });
        }
    }
    Ok(board)
}

fn single_king(board: &Board, color: Color) -> Result<Square, FenError> {
    let mut kings = board
        .occupied()
        .filter(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
        .map(|(sq, _)| sq);
    match (kings.next(), kings.count()) {
        (Some(square), 0) => Ok(square),
        (first, rest) => Err(FenError::KingCount {
            color,
            count: usize::from(first.is_some()) + rest,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn test_start_position() {
        let state = GameState::from_fen(START).unwrap();
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.to_fen(), START);
    }

    #[test]
    fn test_black_to_move_and_kings() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/K7 b KQkq e3 12 40").unwrap();
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.king_square(Color::White), "a1".parse::<Square>().unwrap());
        assert_eq!(state.king_square(Color::Black), "e8".parse::<Square>().unwrap());
        assert_eq!(state.to_fen(), "4k3/8/8/8/8/8/8/K7 b - - 0 1");
    }

    #[test]
    fn test_side_to_move_defaults_to_white() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(state.turn(), Color::White);
    }

    #[test_case("", FenError::Empty; "empty")]
    #[test_case("4k3/8/8/8/8/8/4K3 w", FenError::RankCount(7); "seven ranks")]
    #[test_case("4k3/8/8/8/8/8/8/4K4 w", FenError::RankWidth { rank: 1 }; "wide rank")]
    #[test_case("4k3/8/8/8/8/7/8/4K3 w", FenError::RankWidth { rank: 3 }; "narrow rank")]
    #[test_case("4k3/8/8/8/8/8/8/4X3 w", FenError::BadPiece('X'); "bad letter")]
    #[test_case("4k3/8/8/8/8/8/8/4K3 x", FenError::BadTurn("x".to_string()); "bad turn")]
    #[test_case("8/8/8/8/8/8/8/4K3 w", FenError::KingCount { color: Color::Black, count: 0 }; "no black king")]
    #[test_case("4k3/8/8/8/8/8/8/3KK3 w", FenError::KingCount { color: Color::White, count: 2 }; "two white kings")]
    fn test_invalid_fen(fen: &str, expected: FenError) {
        assert_eq!(GameState::from_fen(fen).err(), Some(expected));
    }
}
