//! Move generation and legality: pseudo-legal moves per piece, the
//! pin/check scan, and the filter that turns one into legal moves.

mod checks;
mod direction;
mod engine;
pub mod movegen;

pub use checks::{Check, CheckReport, Pin};
pub use direction::{DIAGONAL, Direction, KNIGHT_JUMPS, ORTHOGONAL, RAYS};
