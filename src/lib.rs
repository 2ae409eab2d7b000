//! Authoritative two-player chess state and legal move generation.
//!
//! [`GameState`] owns the board, the side to move and the move history.
//! Callers ask it for [`get_valid_moves`](GameState::get_valid_moves), match
//! a candidate against that set and play it with
//! [`make_move`](GameState::make_move) (or let
//! [`try_make_move`](GameState::try_make_move) do the matching);
//! [`undo_move`](GameState::undo_move) takes the last move back.
//!
//! Castling, promotion and en passant are not implemented, and the engine
//! reports no explicit game result: an empty move list while in check is
//! checkmate, an empty list otherwise is stalemate.

pub mod game_logic;
pub mod game_state;

pub use game_logic::{Check, CheckReport, Direction, Pin};
pub use game_state::{Board, Color, GameState, Move, MoveError, Piece, PieceKind, Square};
